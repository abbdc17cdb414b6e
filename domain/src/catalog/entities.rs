//! Catalog domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique, stable identifier of a catalog product.
///
/// Serializes as a bare number so the persisted selection matches the
/// catalog identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category — a fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleanser,
    Moisturizer,
    Suncare,
    Haircare,
    Makeup,
    Fragrance,
}

impl Category {
    /// All categories, in the order they appear in the category picker.
    pub const ALL: [Category; 6] = [
        Category::Cleanser,
        Category::Moisturizer,
        Category::Suncare,
        Category::Haircare,
        Category::Makeup,
        Category::Fragrance,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cleanser => "Cleansers",
            Self::Moisturizer => "Moisturizers",
            Self::Suncare => "Suncare",
            Self::Haircare => "Haircare",
            Self::Makeup => "Makeup",
            Self::Fragrance => "Fragrance",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cleanser" => Ok(Self::Cleanser),
            "moisturizer" => Ok(Self::Moisturizer),
            "suncare" => Ok(Self::Suncare),
            "haircare" => Ok(Self::Haircare),
            "makeup" => Ok(Self::Makeup),
            "fragrance" => Ok(Self::Fragrance),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cleanser => write!(f, "cleanser"),
            Self::Moisturizer => write!(f, "moisturizer"),
            Self::Suncare => write!(f, "suncare"),
            Self::Haircare => write!(f, "haircare"),
            Self::Makeup => write!(f, "makeup"),
            Self::Fragrance => write!(f, "fragrance"),
        }
    }
}

/// A catalog product (Entity).
///
/// Immutable once loaded; owned by the catalog and read-shared by the views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: Category,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            brand: brand.into(),
            category,
            image: image.into(),
            description: description.into(),
        }
    }
}
