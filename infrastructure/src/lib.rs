//! Infrastructure layer for shelfie
//!
//! Adapters that implement the application ports: the JSON catalog source,
//! the file-backed selection store, the completion gateway, the JSONL
//! conversation logger, and the figment-based configuration loader.

pub mod catalog;
pub mod completion;
pub mod config;
pub mod logging;
pub mod storage;

pub use catalog::JsonCatalogSource;
pub use completion::OpenAiCompletionGateway;
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use storage::FileSelectionStore;
