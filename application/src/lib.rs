//! Application layer for shelfie
//!
//! Defines the ports implemented by infrastructure adapters and the chat
//! controller that drives the conversation state machine. This layer knows
//! nothing about terminals, files, or HTTP.

pub mod chat_controller;
pub mod ports;

pub use chat_controller::{ChatController, EMPTY_SELECTION_MESSAGE};
pub use ports::catalog_source::CatalogSource;
pub use ports::completion_gateway::{CompletionGateway, GatewayError};
pub use ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
pub use ports::selection_store::{NoSelectionStore, SelectionStore};
pub use ports::ui_event::UiEvent;
