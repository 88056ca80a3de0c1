use promptscope_models::{ChatRequest, Message};
use serde_json::json;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mock server utilities for exercising the chat-completion client
pub struct LLMMockServer {
    server: MockServer,
}

impl LLMMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn completions_url(&self) -> String {
        format!("{}{}", self.server.uri(), COMPLETIONS_PATH)
    }

    /// Mock a successful OpenAI-style completion; the request must carry the test key
    pub async fn mock_completion(&self, model: &str, response_content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({ "model": model })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-test123",
                "object": "chat.completion",
                "created": 1_700_000_000,
                "model": model,
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": response_content },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 12, "completion_tokens": 6, "total_tokens": 18 }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with a provider-style error body
    pub async fn mock_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error": { "message": message, "type": "invalid_request_error" }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response with an arbitrary raw body
    pub async fn mock_raw_body(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail the test on drop if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn received_count(&self) -> usize {
        self.server.received_requests().await.map(|r| r.len()).unwrap_or(0)
    }

    pub async fn last_body(&self) -> Option<serde_json::Value> {
        let requests = self.server.received_requests().await?;
        requests.last().and_then(|r| serde_json::from_slice(&r.body).ok())
    }
}

pub fn sample_request(model: &str) -> ChatRequest {
    ChatRequest::new(
        model,
        vec![
            Message::system("Identify the placeholders."),
            Message::user("Recommend {num_songs} songs as JSON with title and artist."),
        ],
    )
}
