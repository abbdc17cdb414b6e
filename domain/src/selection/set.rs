//! Selection set — the ordered list of chosen product ids.

use crate::catalog::entities::{Product, ProductId};

/// Ordered set of selected product identifiers (Entity).
///
/// Duplicates are forbidden; membership is checked by equality. Insertion
/// order is preserved so the selection pane renders products in the order
/// the user picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<ProductId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of ids, dropping duplicates while keeping order.
    pub fn from_ids(ids: impl IntoIterator<Item = ProductId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Restore from a persisted JSON payload.
    ///
    /// Parses defensively: invalid JSON, or a JSON value that is not an
    /// array of ids, yields an empty set rather than an error.
    pub fn from_persisted_json(payload: &str) -> Self {
        match serde_json::from_str::<Vec<ProductId>>(payload) {
            Ok(ids) => Self::from_ids(ids),
            Err(_) => Self::new(),
        }
    }

    /// Toggle membership. Returns `true` if the id is selected afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn remove(&mut self, id: ProductId) {
        self.ids.retain(|existing| *existing != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn all(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve ids to full products, silently dropping identifiers no
    /// longer present in the catalog. A rendering pass never sees an id
    /// absent from the loaded catalog.
    pub fn resolve<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        self.ids
            .iter()
            .filter_map(|id| catalog.iter().find(|p| p.id == *id))
            .collect()
    }
}
