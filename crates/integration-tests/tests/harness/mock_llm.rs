//! Mock completion backend for integration tests
//!
//! Serves a single OpenAI-compatible `/v1/chat/completions` route whose reply
//! is fixed when the mock starts, and records every request it receives.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with one choice carrying this content
    Content(String),
    /// 200 with an arbitrary JSON body
    Json(serde_json::Value),
    /// Non-success status with a JSON body
    Error(StatusCode, serde_json::Value),
    /// Non-success status with a plain-text body
    PlainError(StatusCode, String),
}

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// Mock completion backend bound to a random local port
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    reply: MockReply,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockLlm {
    /// Start a mock that returns the delimited PRD/Todo reply
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(MockReply::Content(super::DELIMITED_REPLY.to_owned())).await
    }

    /// Start a mock returning `content` as the first choice
    pub async fn start_with_content(content: &str) -> anyhow::Result<Self> {
        Self::start_with(MockReply::Content(content.to_owned())).await
    }

    /// Start a mock with an explicit reply
    pub async fn start_with(reply: MockReply) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Full completions endpoint URL, as `GROQ_API_URL` would hold it
    pub fn api_url(&self) -> String {
        format!("http://{}/v1/chat/completions", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Success body in the provider's format
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let header_value = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);

    state.requests.lock().unwrap().push(RecordedRequest {
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    match &state.reply {
        MockReply::Content(content) => Json(completion_body(content)).into_response(),
        MockReply::Json(value) => Json(value.clone()).into_response(),
        MockReply::Error(status, value) => (*status, Json(value.clone())).into_response(),
        MockReply::PlainError(status, text) => (*status, text.clone()).into_response(),
    }
}
