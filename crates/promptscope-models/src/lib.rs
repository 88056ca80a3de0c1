// Models module - data structures for chat-completion communication
pub mod types;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use types::{TaskKind, Message, Role, DEFAULT_COMPONENTS_MODEL, DEFAULT_PLACEHOLDERS_MODEL};
pub use requests::ChatRequest;
pub use responses::{ChatResponse, Choice, Usage};
