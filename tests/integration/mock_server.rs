//! Mock chat-completions endpoint for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use prompt_chat::{ChatClient, ClientConfig};

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const TEST_API_KEY: &str = "sk-test-key";

/// Test fixture that owns a mock server for one test
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        let server = Server::new();
        let base_url = format!("{}/v1", server.url());
        Self { server, base_url }
    }

    /// Client with default model/temperature pointed at the mock server
    pub fn client(&self) -> ChatClient {
        self.client_with(TEST_API_KEY, "", 0.0)
    }

    pub fn client_with(&self, api_key: &str, model: &str, temperature: f64) -> ChatClient {
        let config = ClientConfig::new(api_key, model, temperature).with_base_url(&self.base_url);
        ChatClient::from_config(config).expect("Failed to build client")
    }

    /// Create a mock for a JSON response with the given status
    pub fn mock_json_response(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", CHAT_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Create a mock that only answers when the request body contains `expected`
    pub fn mock_matching_body(&mut self, expected: serde_json::Value, body: &str) -> Mock {
        self.server
            .mock("POST", CHAT_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}

/// A successful completion body with a single assistant choice
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
