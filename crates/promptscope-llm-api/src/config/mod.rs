use std::fmt;

pub mod factory;
pub use factory::ClientFactory;

/// Backend type for chat-completion providers
#[derive(Debug, Clone, PartialEq)]
pub enum BackendType {
    Groq,
    OpenAI,
}

impl BackendType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAI => "openai",
        }
    }

    /// Environment variable holding the bearer key for this provider
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// Default Groq API URL
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default OpenAI API URL
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Get the default URL for a given backend type
pub fn get_default_url_for_backend(backend: &BackendType) -> String {
    match backend {
        BackendType::Groq => GROQ_API_URL.to_string(),
        BackendType::OpenAI => OPENAI_API_URL.to_string(),
    }
}

const COMPLETIONS_PATH: &str = "v1/chat/completions";

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints.
/// Only the path decides: a host named `chat.*` still gets the completions path.
pub fn normalize_api_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.path().ends_with("/completions") {
                return url.to_string();
            }
            let path = format!("{}/{}", parsed.path().trim_end_matches('/'), COMPLETIONS_PATH);
            parsed.set_path(&path);
            parsed.to_string()
        }
        // Not an absolute URL; leave the request to fail in the transport layer
        Err(_) => {
            if url.ends_with("/completions") {
                url.to_string()
            } else {
                format!("{}/{}", url.trim_end_matches('/'), COMPLETIONS_PATH)
            }
        }
    }
}

/// Bearer API key. Debug and Display never show the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Resolve a credential through `lookup` (normally `std::env::var`).
/// Unset and blank values both resolve to `None`.
pub fn resolve_credential<F>(env_var: &str, lookup: F) -> Option<Credential>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(env_var)
        .map(Credential::new)
        .filter(|credential| !credential.is_blank())
}

/// Everything needed to reach one provider
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendType,
    pub api_url: String,
    pub credential: Option<Credential>,
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(backend: BackendType) -> Self {
        let api_url = get_default_url_for_backend(&backend);
        Self {
            backend,
            api_url,
            credential: None,
            verbose: false,
        }
    }

    /// Override the endpoint; `None` keeps the backend default
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = normalize_api_url(url);
        }
        self
    }

    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
