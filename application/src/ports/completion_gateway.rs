//! Completion gateway port
//!
//! Defines the interface for the remote completion endpoint. The only
//! implementation lives in the infrastructure layer; tests use mocks.

use async_trait::async_trait;
use shelfie_domain::ChatMessage;
use thiserror::Error;

/// Errors that can occur during a completion request
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The endpoint rejected the credential (HTTP 401). Distinguished from
    /// generic failures so the UI can render a more specific message.
    #[error("Completion endpoint rejected the credential")]
    Unauthorized,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GatewayError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized)
    }
}

/// Gateway to the remote completion endpoint.
///
/// Takes the full ordered transcript and returns the assistant's reply
/// content. The implementation carries the fixed model identifier and
/// output cap; callers only deal in messages.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GatewayError>;
}
