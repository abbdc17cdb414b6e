//! Persistence adapters

pub mod selection_store;

pub use selection_store::FileSelectionStore;
