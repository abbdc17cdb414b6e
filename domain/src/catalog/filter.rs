//! Catalog filtering — pure functions over the loaded product list.
//!
//! The visible subset is derived synchronously from [`FilterState`]; both
//! filters compose with logical AND and input order is preserved.

use super::entities::{Category, Product};

/// Current filter inputs (Value Object).
///
/// Volatile UI state: mutated by input events, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Exact-match category filter; `None` means no category filtering.
    pub category: Option<Category>,
    /// Raw search input. Only the trimmed, non-empty form filters.
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective search query, if one is active.
    pub fn search_query(&self) -> Option<&str> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether any filter is currently active.
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.search_query().is_some()
    }
}

/// Why a filtered view came up empty.
///
/// The three cases render distinct placeholder messages; they are not a
/// single generic "no results".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// No filter applied at all.
    NoFilter,
    /// An active search produced no matches.
    NoSearchMatches,
    /// An active category (without search) produced no matches.
    NoCategoryMatches,
}

impl EmptyReason {
    /// Classify an empty result for the given filter state.
    pub fn for_state(state: &FilterState) -> Self {
        if state.search_query().is_some() {
            Self::NoSearchMatches
        } else if state.category.is_some() {
            Self::NoCategoryMatches
        } else {
            Self::NoFilter
        }
    }
}

/// Filter `products` by the current category and search query.
///
/// Category is exact-match equality; search is a case-insensitive substring
/// match against name, brand, and description. Returns references in input
/// order.
pub fn filter<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let query = state.search_query().map(str::to_lowercase);

    products
        .iter()
        .filter(|p| match state.category {
            Some(category) => p.category == category,
            None => true,
        })
        .filter(|p| match &query {
            Some(q) => {
                p.name.to_lowercase().contains(q)
                    || p.brand.to_lowercase().contains(q)
                    || p.description.to_lowercase().contains(q)
            }
            None => true,
        })
        .collect()
}
