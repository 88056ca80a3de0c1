//! Prompt-template analysis tools backed by hosted chat-completion models.
//!
//! `identify-components` segments a template into functional components using
//! a Groq-hosted model; `identify-placeholders` classifies its substitution
//! slots using an OpenAI-hosted model. Both print the model's text verbatim.

pub mod app;
pub mod cli;
pub mod task;
pub mod template;


pub use app::{run_main, run_tool, setup_from_cli, AppConfig};
pub use cli::Cli;
pub use task::{build_request, instruction_for, backend_for, COMPONENTS_INSTRUCTION, PLACEHOLDERS_INSTRUCTION};
pub use template::{scan_placeholders, PlaceholderMatch, RelativePosition};
