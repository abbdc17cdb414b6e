//! Presenter — applies controller [`UiEvent`]s to [`TuiState`].
//!
//! The controller narrates transcript changes over a channel; this is the
//! single place where that narration becomes display state.

use super::state::{DisplayMessage, TuiState};
use shelfie_application::UiEvent;

/// Message shown for the distinguished unauthorized condition.
const UNAUTHORIZED_MESSAGE: &str =
    "Unauthorized: the completion endpoint rejected the credential. Check the proxy's API key.";

pub struct TuiPresenter;

impl TuiPresenter {
    /// Apply one controller event to the display state.
    pub fn apply(state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::TranscriptReset => {
                // A fresh routine conversation replaces the chat panel
                state.messages.clear();
                state.chat_scroll = 0;
                state.auto_scroll = true;
            }
            UiEvent::UserTurn(content) => {
                state.push_message(DisplayMessage::user(content.clone()));
            }
            UiEvent::AssistantTurn(content) => {
                state.push_message(DisplayMessage::assistant(content.clone()));
            }
            UiEvent::ValidationError(message) => {
                state.push_message(DisplayMessage::error(message.clone()));
                state.set_flash(message.clone());
            }
            UiEvent::CompletionError {
                message,
                unauthorized,
            } => {
                let rendered = if *unauthorized {
                    UNAUTHORIZED_MESSAGE.to_string()
                } else {
                    format!("Could not get a response: {}. Please try again.", message)
                };
                state.push_message(DisplayMessage::error(rendered));
            }
            UiEvent::RequestStarted => {
                state.is_generating = true;
            }
            UiEvent::RequestFinished => {
                state.is_generating = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::MessageRole;

    #[test]
    fn test_transcript_reset_clears_panel() {
        let mut state = TuiState::new();
        state.push_message(DisplayMessage::assistant("old routine"));
        state.chat_scroll = 4;

        TuiPresenter::apply(&mut state, &UiEvent::TranscriptReset);
        assert!(state.messages.is_empty());
        assert_eq!(state.chat_scroll, 0);
        assert!(state.auto_scroll);
    }

    #[test]
    fn test_turns_append_in_order() {
        let mut state = TuiState::new();
        TuiPresenter::apply(&mut state, &UiEvent::UserTurn("question".into()));
        TuiPresenter::apply(&mut state, &UiEvent::AssistantTurn("answer".into()));

        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].role, MessageRole::User);
        assert_eq!(state.messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_unauthorized_error_renders_distinct_message() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            &UiEvent::CompletionError {
                message: "HTTP 401".into(),
                unauthorized: true,
            },
        );

        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, MessageRole::Error);
        assert!(state.messages[0].content.contains("Unauthorized"));
    }

    #[test]
    fn test_generic_error_keeps_reason_visible() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            &UiEvent::CompletionError {
                message: "HTTP 502".into(),
                unauthorized: false,
            },
        );

        assert!(state.messages[0].content.contains("HTTP 502"));
        assert!(!state.messages[0].content.contains("Unauthorized"));
    }

    #[test]
    fn test_validation_error_flashes_and_renders() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            &UiEvent::ValidationError("Select at least one product".into()),
        );

        assert_eq!(state.messages[0].role, MessageRole::Error);
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_request_lifecycle_toggles_busy_flag() {
        let mut state = TuiState::new();
        TuiPresenter::apply(&mut state, &UiEvent::RequestStarted);
        assert!(state.is_generating);
        TuiPresenter::apply(&mut state, &UiEvent::RequestFinished);
        assert!(!state.is_generating);
    }
}
