//! Key-shielding proxy for the completion endpoint.
//!
//! Accepts only POST, forwards the raw request body unmodified to the
//! upstream completion endpoint with a server-held bearer credential, and
//! relays the upstream status and body verbatim with a JSON content type.
//! No body validation, no retry, no timeout override. The credential comes
//! from the process environment and never reaches client code.

use axum::{
    Router,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Largest request body the proxy will read (matches typical completion
/// payload limits; the upstream enforces its own cap anyway).
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared proxy state: one client, the upstream URL, and the credential.
pub struct ProxyState {
    client: reqwest::Client,
    upstream: String,
    api_key: String,
}

impl ProxyState {
    pub fn new(upstream: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.into(),
            api_key: api_key.into(),
        }
    }
}

/// Build the proxy router. A single catch-all handler keeps the method
/// check explicit, mirroring the one-endpoint contract.
pub fn router(state: Arc<ProxyState>) -> Router {
    Router::new().fallback(handle).with_state(state)
}

async fn handle(State(state): State<Arc<ProxyState>>, request: Request) -> Response {
    // Only allow POST requests
    if request.method() != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response();
    }

    // Read the raw body; it is forwarded without validation
    let body = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not read request body: {}", e);
            return (StatusCode::BAD_REQUEST, "Could not read request body").into_response();
        }
    };

    debug!("Forwarding {} bytes to {}", body.len(), state.upstream);

    let upstream_response = match state
        .client
        .post(&state.upstream)
        .header(header::CONTENT_TYPE, "application/json")
        .bearer_auth(&state.api_key)
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Upstream request failed: {}", e);
            return (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response();
        }
    };

    // Relay status and body verbatim
    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let payload = upstream_response.bytes().await.unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload))
        .unwrap_or_else(|_| StatusCode::BAD_GATEWAY.into_response())
}
