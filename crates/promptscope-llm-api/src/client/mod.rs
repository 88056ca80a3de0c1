use async_trait::async_trait;

use promptscope_models::{ChatRequest, Usage};

use crate::config::Credential;
use crate::error::InvokeError;

pub mod openai_compat;

/// Text of the first completion plus whatever metadata the provider sent along
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: String,
    pub model: Option<String>,
    pub usage: Option<Usage>,
}

impl ModelResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            model: None,
            usage: None,
        }
    }
}

/// LLM client trait - one non-streaming completion per call
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Submit the request and return the first choice's text.
    ///
    /// A missing or blank credential fails with `InvokeError::Authentication`
    /// without touching the network.
    async fn submit(
        &self,
        request: &ChatRequest,
        credential: Option<&Credential>,
    ) -> Result<ModelResponse, InvokeError>;
}
