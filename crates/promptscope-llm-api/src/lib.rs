//! # promptscope-llm-api
//!
//! Single-shot chat-completion calls against OpenAI-compatible providers:
//! - Groq
//! - OpenAI
//!
//! ## Features
//!
//! - **One Contract**: the `LlmClient` trait submits a `ChatRequest` and returns the first completion
//! - **Explicit Credentials**: keys are resolved by the caller and passed in, never read from ambient state here
//! - **Typed Failures**: authentication, transport and provider errors are distinct `InvokeError` variants
//!
//! ## Example
//!
//! ```rust,no_run
//! use promptscope_llm_api::{BackendType, ClientConfig, ClientFactory, Credential};
//! use promptscope_models::{ChatRequest, Message};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new(BackendType::OpenAI)
//!         .with_credential(Some(Credential::new("sk-your-key")));
//!     let client = ClientFactory::create(&config);
//!
//!     let request = ChatRequest::new(
//!         "gpt-4o",
//!         vec![Message::system("Classify the placeholders."), Message::user("Hi {name}")],
//!     );
//!
//!     let response = client.submit(&request, config.credential.as_ref()).await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;


// Re-export commonly used types
pub use client::{
    LlmClient,
    ModelResponse,
    openai_compat::OpenAiCompatibleClient,
};

pub use config::{
    BackendType,
    ClientConfig,
    ClientFactory,
    Credential,
    GROQ_API_URL,
    OPENAI_API_URL,
    normalize_api_url,
    get_default_url_for_backend,
    resolve_credential,
};

pub use error::InvokeError;
