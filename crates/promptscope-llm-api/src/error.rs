use thiserror::Error;

/// Failures of a single chat-completion round trip. None of them are retried.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Credential missing locally or rejected by the provider (401/403)
    #[error("{backend} authentication failed: {message}")]
    Authentication {
        backend: &'static str,
        message: String,
    },

    /// The HTTP exchange could not complete
    #[error("{backend} request failed")]
    Transport {
        backend: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status, or a success status with an unusable body
    #[error("{backend} API error ({status}): {body}")]
    Provider {
        backend: &'static str,
        status: u16,
        body: String,
    },
}

impl InvokeError {
    pub fn missing_credential(backend: &'static str, env_var: &str) -> Self {
        InvokeError::Authentication {
            backend,
            message: format!("no API key provided; set the {} environment variable", env_var),
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, InvokeError::Authentication { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, InvokeError::Transport { .. })
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, InvokeError::Provider { .. })
    }

    /// HTTP status reported by the provider, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            InvokeError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}
