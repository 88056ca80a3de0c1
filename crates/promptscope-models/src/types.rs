use serde::{Deserialize, Deserializer, Serialize};

/// Default Groq-hosted model for component identification
pub const DEFAULT_COMPONENTS_MODEL: &str = "llama3-70b-8192";

/// Default OpenAI-hosted model for placeholder identification
pub const DEFAULT_PLACEHOLDERS_MODEL: &str = "gpt-4o";

/// Classification tasks supported by the tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Components,
    Placeholders,
}

impl TaskKind {
    /// Model identifier used when no override is given
    pub fn default_model(&self) -> &'static str {
        match self {
            TaskKind::Components => DEFAULT_COMPONENTS_MODEL,
            TaskKind::Placeholders => DEFAULT_PLACEHOLDERS_MODEL,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskKind::Components => "Component Identification",
            TaskKind::Placeholders => "Placeholder Identification",
        }
    }
}

/// Helper function to deserialize string or null values
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Null => Ok(String::new()),
        _ => Ok(String::new()),
    }
}

/// Message roles used by the chat API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// Message structure for chat API
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Message {
    #[serde(default)]
    pub role: String,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role: role.as_str().to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}
