use std::sync::Arc;

use crate::client::{LlmClient, openai_compat::OpenAiCompatibleClient};
use crate::config::{BackendType, ClientConfig};

/// Client factory for creating LLM clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create an LLM client for the configured backend
    ///
    /// # Arguments
    /// * `config` - Backend, endpoint and verbosity. The credential stays in the
    ///   config and is handed to `LlmClient::submit` by the caller.
    ///
    /// # Returns
    /// Arc-wrapped LLM client implementing the LlmClient trait
    pub fn create(config: &ClientConfig) -> Arc<dyn LlmClient> {
        match config.backend {
            // Both providers speak the OpenAI chat-completion dialect
            BackendType::Groq | BackendType::OpenAI => Arc::new(OpenAiCompatibleClient::new(
                config.backend.clone(),
                config.api_url.clone(),
                config.verbose,
            )),
        }
    }
}
