//! Chat controller — the conversation state machine.
//!
//! Owns the [`Transcript`] and drives the two chat flows:
//!
//! - **Generate routine**: resets the transcript to a fresh system
//!   instruction plus one user message enumerating the selected products,
//!   then requests a completion.
//! - **Follow-up**: screens the input against the topic allow-list, appends
//!   a user turn, and requests a completion with the full transcript.
//!
//! The controller runs inside a single background task fed by a command
//! channel (see the presentation layer), so invocations are serialized per
//! conversation and transcript mutations cannot interleave.

use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::ui_event::UiEvent;
use shelfie_domain::{
    Product, REFUSAL_MESSAGE, SYSTEM_PROMPT, Transcript, is_on_topic, routine_request,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Validation message shown when generating with an empty selection.
pub const EMPTY_SELECTION_MESSAGE: &str =
    "Select at least one product before generating a routine.";

/// Conversation state machine over the transcript.
pub struct ChatController {
    gateway: Arc<dyn CompletionGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
    transcript: Transcript,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
}

impl ChatController {
    pub fn new(gateway: Arc<dyn CompletionGateway>, ui_tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
            transcript: Transcript::new(),
            ui_tx,
        }
    }

    /// Attach a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Current transcript (read-only view).
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Generate a routine from the resolved selection.
    ///
    /// An empty selection surfaces a validation message and leaves the
    /// transcript untouched — no remote call is made.
    pub async fn generate_routine(&mut self, selected: &[Product]) {
        if selected.is_empty() {
            debug!("Routine requested with empty selection");
            self.emit(UiEvent::ValidationError(EMPTY_SELECTION_MESSAGE.into()));
            return;
        }

        info!("Generating routine for {} products", selected.len());

        let refs: Vec<&Product> = selected.iter().collect();
        self.transcript
            .reset_with(SYSTEM_PROMPT, routine_request(&refs));
        self.emit(UiEvent::TranscriptReset);

        self.request_completion("routine_generated").await;
    }

    /// Handle a follow-up question from the chat form.
    ///
    /// Off-topic inputs short-circuit with the scripted refusal appended as
    /// an assistant turn; nothing reaches the remote endpoint.
    pub async fn ask(&mut self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }

        if !is_on_topic(trimmed) {
            debug!("Follow-up rejected by topic screen");
            self.transcript.push_assistant(REFUSAL_MESSAGE);
            self.emit(UiEvent::AssistantTurn(REFUSAL_MESSAGE.into()));
            self.conversation_logger.log(ConversationEvent::new(
                "refusal",
                serde_json::json!({ "input": trimmed }),
            ));
            return;
        }

        self.transcript.push_user(trimmed);
        self.emit(UiEvent::UserTurn(trimmed.into()));

        self.request_completion("follow_up").await;
    }

    /// Send the current transcript to the gateway and apply the outcome.
    ///
    /// On success the assistant turn is appended; on failure the transcript
    /// is preserved as-is and the error is surfaced inline.
    async fn request_completion(&mut self, event_type: &'static str) {
        self.emit(UiEvent::RequestStarted);

        match self.gateway.complete(self.transcript.messages()).await {
            Ok(content) => {
                self.transcript.push_assistant(&content);
                self.conversation_logger.log(ConversationEvent::new(
                    event_type,
                    serde_json::json!({
                        "turns": self.transcript.len(),
                        "bytes": content.len(),
                        "text": content,
                    }),
                ));
                self.emit(UiEvent::AssistantTurn(content));
            }
            Err(e) => {
                warn!("Completion request failed: {}", e);
                self.emit(UiEvent::CompletionError {
                    message: e.to_string(),
                    unauthorized: e.is_unauthorized(),
                });
            }
        }

        self.emit(UiEvent::RequestFinished);
    }

    fn emit(&self, event: UiEvent) {
        // The receiver outlives the controller; a send failure only means
        // the UI is shutting down.
        let _ = self.ui_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_gateway::GatewayError;
    use async_trait::async_trait;
    use shelfie_domain::{Category, ChatMessage, Role};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("no more responses".into())))
        }
    }

    fn controller_with(
        responses: Vec<Result<String, GatewayError>>,
    ) -> (
        ChatController,
        Arc<MockGateway>,
        mpsc::UnboundedReceiver<UiEvent>,
    ) {
        let gateway = Arc::new(MockGateway::new(responses));
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let controller = ChatController::new(gateway.clone(), ui_tx);
        (controller, gateway, ui_rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new(
                1,
                "Micellar Water",
                "Pure Form",
                Category::Cleanser,
                "img/micellar.jpg",
                "Gentle no-rinse cleanser.",
            ),
            Product::new(
                2,
                "Hydra Genius",
                "Glow Labs",
                Category::Moisturizer,
                "img/hydra.jpg",
                "Aloe water moisturizer.",
            ),
        ]
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_generate_with_empty_selection_never_calls_gateway() {
        let (mut controller, gateway, mut ui_rx) = controller_with(vec![]);

        controller.generate_routine(&[]).await;

        assert_eq!(gateway.call_count(), 0);
        assert!(controller.transcript().is_empty());
        let events = drain(&mut ui_rx);
        assert_eq!(
            events,
            vec![UiEvent::ValidationError(EMPTY_SELECTION_MESSAGE.into())]
        );
    }

    #[tokio::test]
    async fn test_generate_resets_transcript_and_appends_assistant() {
        let (mut controller, gateway, mut ui_rx) =
            controller_with(vec![Ok("Step 1: cleanse.".into())]);

        controller.generate_routine(&sample_products()).await;

        assert_eq!(gateway.call_count(), 1);
        let messages = controller.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("1. Micellar Water by Pure Form"));
        assert!(messages[1].content.contains("2. Hydra Genius by Glow Labs"));
        assert_eq!(messages[2].role, Role::Assistant);

        let events = drain(&mut ui_rx);
        assert!(events.contains(&UiEvent::TranscriptReset));
        assert!(events.contains(&UiEvent::AssistantTurn("Step 1: cleanse.".into())));
    }

    #[tokio::test]
    async fn test_second_generate_discards_previous_conversation() {
        let (mut controller, _gateway, mut ui_rx) =
            controller_with(vec![Ok("first".into()), Ok("second".into())]);

        controller.generate_routine(&sample_products()).await;
        controller.generate_routine(&sample_products()).await;

        let messages = controller.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, "second");
        drain(&mut ui_rx);
    }

    #[tokio::test]
    async fn test_generate_transport_error_preserves_transcript() {
        let (mut controller, _gateway, mut ui_rx) =
            controller_with(vec![Err(GatewayError::Transport("connection refused".into()))]);

        controller.generate_routine(&sample_products()).await;

        // System + user stay; no assistant turn was appended
        let messages = controller.transcript().messages();
        assert_eq!(messages.len(), 2);

        let events = drain(&mut ui_rx);
        assert!(events.iter().any(|e| matches!(
            e,
            UiEvent::CompletionError {
                unauthorized: false,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_unauthorized_is_distinguished() {
        let (mut controller, _gateway, mut ui_rx) =
            controller_with(vec![Err(GatewayError::Unauthorized)]);

        controller.generate_routine(&sample_products()).await;

        let events = drain(&mut ui_rx);
        assert!(events.iter().any(|e| matches!(
            e,
            UiEvent::CompletionError {
                unauthorized: true,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn test_off_topic_ask_refuses_without_remote_call() {
        let (mut controller, gateway, mut ui_rx) = controller_with(vec![]);

        controller.ask("what is the weather today").await;

        assert_eq!(gateway.call_count(), 0);
        // Exactly one scripted refusal turn, nothing else
        let messages = controller.transcript().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, REFUSAL_MESSAGE);

        let events = drain(&mut ui_rx);
        assert_eq!(events, vec![UiEvent::AssistantTurn(REFUSAL_MESSAGE.into())]);
    }

    #[tokio::test]
    async fn test_on_topic_ask_appends_user_and_assistant() {
        let (mut controller, gateway, mut ui_rx) =
            controller_with(vec![Ok("Twice a day.".into())]);

        controller.ask("how often should I use this serum").await;

        assert_eq!(gateway.call_count(), 1);
        let messages = controller.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "Twice a day.");

        let events = drain(&mut ui_rx);
        assert!(events.contains(&UiEvent::UserTurn("how often should I use this serum".into())));
        assert!(events.contains(&UiEvent::AssistantTurn("Twice a day.".into())));
    }

    #[tokio::test]
    async fn test_ask_error_keeps_user_turn() {
        let (mut controller, _gateway, mut ui_rx) =
            controller_with(vec![Err(GatewayError::MalformedResponse("no choices".into()))]);

        controller.ask("is this routine okay").await;

        let messages = controller.transcript().messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);

        let events = drain(&mut ui_rx);
        assert!(events.iter().any(|e| matches!(e, UiEvent::CompletionError { .. })));
    }

    #[tokio::test]
    async fn test_blank_ask_is_ignored() {
        let (mut controller, gateway, mut ui_rx) = controller_with(vec![]);

        controller.ask("   ").await;

        assert_eq!(gateway.call_count(), 0);
        assert!(controller.transcript().is_empty());
        assert!(drain(&mut ui_rx).is_empty());
    }

    #[tokio::test]
    async fn test_ask_input_is_trimmed() {
        let (mut controller, _gateway, mut ui_rx) = controller_with(vec![Ok("ok".into())]);

        controller.ask("  serum question  ").await;

        assert_eq!(
            controller.transcript().messages()[0].content,
            "serum question"
        );
        drain(&mut ui_rx);
    }

    #[tokio::test]
    async fn test_request_lifecycle_events_bracket_completion() {
        let (mut controller, _gateway, mut ui_rx) = controller_with(vec![Ok("done".into())]);

        controller.generate_routine(&sample_products()).await;

        let events = drain(&mut ui_rx);
        let started = events.iter().position(|e| *e == UiEvent::RequestStarted);
        let finished = events.iter().position(|e| *e == UiEvent::RequestFinished);
        assert!(started.is_some() && finished.is_some());
        assert!(started < finished);
    }
}
