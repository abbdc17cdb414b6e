//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No products selected")]
    EmptySelection,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    /// Check if this error is the empty-selection validation case
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, DomainError::EmptySelection)
    }
}
