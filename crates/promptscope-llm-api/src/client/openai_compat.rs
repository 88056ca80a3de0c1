use async_trait::async_trait;
use reqwest::StatusCode;

use promptscope_logging::{log_request, log_response};
use promptscope_models::{ChatRequest, ChatResponse};

use crate::client::{LlmClient, ModelResponse};
use crate::config::{BackendType, Credential};
use crate::error::InvokeError;

/// Chat-completion client for OpenAI-compatible endpoints (Groq and OpenAI)
pub struct OpenAiCompatibleClient {
    backend: BackendType,
    api_url: String,
    verbose: bool,
    client: reqwest::Client,
}

impl OpenAiCompatibleClient {
    pub fn new(backend: BackendType, api_url: String, verbose: bool) -> Self {
        Self {
            backend,
            api_url,
            verbose,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiCompatibleClient {
    async fn submit(
        &self,
        request: &ChatRequest,
        credential: Option<&Credential>,
    ) -> Result<ModelResponse, InvokeError> {
        let backend = self.backend.as_str();

        let credential = match credential {
            Some(credential) if !credential.is_blank() => credential,
            _ => return Err(InvokeError::missing_credential(backend, self.backend.api_key_env())),
        };

        log_request(&self.api_url, request, self.verbose);

        let response = self.client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", credential.expose()))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|source| InvokeError::Transport { backend, source })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|source| InvokeError::Transport { backend, source })?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(InvokeError::Authentication {
                backend,
                message: format!("provider rejected the API key ({}): {}", status.as_u16(), response_text),
            });
        }

        if !status.is_success() {
            return Err(InvokeError::Provider {
                backend,
                status: status.as_u16(),
                body: response_text,
            });
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text)
            .map_err(|e| InvokeError::Provider {
                backend,
                status: status.as_u16(),
                body: format!("malformed completion envelope: {}", e),
            })?;

        let content = chat_response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| InvokeError::Provider {
                backend,
                status: status.as_u16(),
                body: "response contained no choices".to_string(),
            })?;

        log_response(&content, chat_response.model.as_deref(), chat_response.usage.as_ref(), self.verbose);

        Ok(ModelResponse {
            content,
            model: chat_response.model,
            usage: chat_response.usage,
        })
    }
}
