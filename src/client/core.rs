use crate::client::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::types::{ChatRequest, ChatResponse};
use crate::{Error, Result};
use tracing::debug;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Blocking client for one-shot chat completions.
///
/// Holds no mutable state: a single client can be shared across threads and
/// each call builds its own request.
#[derive(Debug)]
pub struct ChatClient {
    config: ClientConfig,
    transport: HttpTransport,
}

impl ChatClient {
    /// Create a client against the public OpenAI API.
    ///
    /// An empty `model` selects `gpt-4o-mini`; a `temperature` of `0.0`
    /// selects `0.7` (see [`ClientConfig`]).
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, temperature: f64) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, model, temperature))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.base_url(), config.api_key())?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        self.config.model()
    }

    pub fn temperature(&self) -> f64 {
        self.config.temperature()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Build the request body `send_chat` would send, without sending it.
    pub fn build_request(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: Option<f64>,
    ) -> ChatRequest {
        ChatRequest::single_turn(
            self.config.model(),
            system_prompt,
            user_prompt,
            temperature.unwrap_or(self.config.temperature()),
        )
    }

    /// Send one system + user exchange and return the first choice's content.
    ///
    /// `temperature` overrides the configured value for this call only.
    /// Prompts are forwarded as given, empty strings included.
    pub fn send_chat(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        temperature: Option<f64>,
    ) -> Result<String> {
        let request = self.build_request(system_prompt, user_prompt, temperature);
        let body = serde_json::to_vec(&request).map_err(Error::Serialization)?;

        debug!(
            model = %request.model,
            temperature = request.temperature,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let reply = self.transport.post_json(CHAT_COMPLETIONS_PATH, body)?;
        if !reply.is_ok() {
            return Err(Error::Api {
                status: reply.status,
                body: reply.body,
            });
        }

        let response: ChatResponse =
            serde_json::from_str(&reply.body).map_err(Error::ResponseParse)?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(Error::EmptyResponse)
    }
}
