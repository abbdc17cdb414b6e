//! UI events emitted by the chat controller for presentation rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer: the controller mutates the transcript and narrates
//! what changed; the presenter applies the narration to display state.

/// Events emitted by [`ChatController`](crate::chat_controller::ChatController)
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The transcript was reset for a new routine conversation.
    TranscriptReset,

    /// A user turn was appended to the transcript.
    UserTurn(String),

    /// An assistant turn was appended to the transcript (a completion
    /// result or the scripted refusal).
    AssistantTurn(String),

    /// Generate-routine was requested with an empty selection. Nothing was
    /// sent and the transcript is unchanged.
    ValidationError(String),

    /// A completion request failed. Rendered inline without polluting the
    /// transcript; `unauthorized` selects the more specific message.
    CompletionError { message: String, unauthorized: bool },

    /// A remote request is now in flight.
    RequestStarted,

    /// The in-flight remote request finished (successfully or not).
    RequestFinished,
}
