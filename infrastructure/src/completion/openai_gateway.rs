//! Completion gateway adapter for an OpenAI-style chat endpoint.
//!
//! Speaks the `{model, messages, max_tokens}` request shape and reads the
//! reply from `choices[0].message.content`. The endpoint is usually the
//! shelfie proxy, which injects the credential server-side; the client
//! never carries a key of its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shelfie_application::{CompletionGateway, GatewayError};
use shelfie_domain::ChatMessage;
use tracing::debug;

/// Gateway that POSTs the transcript to a chat-completions endpoint.
pub struct OpenAiCompletionGateway {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiCompletionGateway {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            max_tokens,
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Interpret an endpoint reply.
///
/// 401 is the distinguished unauthorized condition; other non-success
/// statuses and unparseable payloads map to their own variants.
fn parse_completion(status: u16, body: &str) -> Result<String, GatewayError> {
    if status == 401 {
        return Err(GatewayError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(GatewayError::Transport(format!("HTTP {}", status)));
    }

    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| GatewayError::MalformedResponse("no choices in response".to_string()))
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GatewayError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
        };

        debug!(
            "Requesting completion: {} messages via {}",
            messages.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        parse_completion(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfie_domain::Role;

    #[test]
    fn test_request_wire_shape() {
        let messages = vec![
            ChatMessage::system("instructions"),
            ChatMessage::user("question"),
        ];
        let request = CompletionRequest {
            model: "gpt-4o",
            messages: &messages,
            max_tokens: 500,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["max_tokens"], 500);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "question");
    }

    #[test]
    fn test_parse_success_reads_first_choice() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Use the cleanser first."}}
            ]
        }"#;
        assert_eq!(
            parse_completion(200, body).unwrap(),
            "Use the cleanser first."
        );
    }

    #[test]
    fn test_parse_401_is_unauthorized() {
        let result = parse_completion(401, "{\"error\": \"bad key\"}");
        assert!(matches!(result, Err(GatewayError::Unauthorized)));
    }

    #[test]
    fn test_parse_server_error_is_transport() {
        let result = parse_completion(502, "Bad Gateway");
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }

    #[test]
    fn test_parse_invalid_payload_is_malformed() {
        assert!(matches!(
            parse_completion(200, "not json"),
            Err(GatewayError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_completion(200, "{\"choices\": []}"),
            Err(GatewayError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_chat_message_roles_serialize_for_wire() {
        let message = ChatMessage::assistant("hello");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(message.role, Role::Assistant);
    }
}
