use promptscope_llm_api::BackendType;
use promptscope_models::{ChatRequest, Message, TaskKind};

/// System instruction for component identification
pub const COMPONENTS_INSTRUCTION: &str = "\
You analyze prompt templates. The next message is a prompt template, given verbatim.
Split it into complete sentences and assign each sentence to exactly one of the components below. \
Do not split a sentence into fragments unless a fragment is a complete idea on its own, and never assign the same text to two components.

Components:
1. profile/role: who or what the model is acting as.
2. directive: the core intent of the prompt, usually an instruction or a question.
3. workflows: steps and processes the model should follow to complete the task.
4. context: background information the model needs to refer to.
5. examples: examples of what the response should look like.
6. output format/style: the type, format or style of the output.
7. constraints: restrictions the model must respect when responding.
8. others: anything that does not fit the categories above.

Answer with a single JSON object and nothing else. Use exactly these keys, with the matching text as value or an empty string when nothing matches:
{
    \"profile/role\": \"\",
    \"directive\": \"\",
    \"workflows\": \"\",
    \"context\": \"\",
    \"examples\": \"\",
    \"output format/style\": \"\",
    \"constraints\": \"\",
    \"others\": \"\"
}";

/// System instruction for placeholder identification
pub const PLACEHOLDERS_INSTRUCTION: &str = "\
You analyze prompt templates. The next message is a prompt template, given verbatim.
Find every placeholder in it: a substitution slot such as {name}, {{name}} or the literal word PLACEHOLDER \
that is meant to be filled in when the template is used. Classify each one by the kind of value it expects:

1. User Question: a query or question supplied by the user, e.g. {question}, {query}.
2. Contextual Information: supporting background such as history, preferences or prior turns, e.g. {chat_history}, {background_info}.
3. Knowledge Input: the core content the prompt processes, analyzes or transforms, e.g. {document}, {text}, {code_snippet}.
4. Metadata/Short Phrases: short settings that tune the task, e.g. {output_format}, {name}, {location}, {language}, {number}.
5. Others: anything that does not fit the categories above.

Answer with a JSON list and nothing else, one object per placeholder in order of appearance:
[{\"placeholder\": \"{name}\", \"category\": \"Metadata/Short Phrases\"}]
Return [] when the template has no placeholders.";

/// The fixed instruction text for a task
pub fn instruction_for(task: TaskKind) -> &'static str {
    match task {
        TaskKind::Components => COMPONENTS_INSTRUCTION,
        TaskKind::Placeholders => PLACEHOLDERS_INSTRUCTION,
    }
}

/// Provider that serves each task
pub fn backend_for(task: TaskKind) -> BackendType {
    match task {
        TaskKind::Components => BackendType::Groq,
        TaskKind::Placeholders => BackendType::OpenAI,
    }
}

pub fn binary_name(task: TaskKind) -> &'static str {
    match task {
        TaskKind::Components => "identify-components",
        TaskKind::Placeholders => "identify-placeholders",
    }
}

pub fn about(task: TaskKind) -> &'static str {
    match task {
        TaskKind::Components => "Identify the components of a prompt template using a Groq-hosted LLM",
        TaskKind::Placeholders => "Identify and classify the placeholders of a prompt template using an OpenAI-hosted LLM",
    }
}

/// Sampling temperature per task. Placeholder classification pins it to 0 so
/// repeated runs give the same categories.
pub fn temperature_for(task: TaskKind) -> Option<f32> {
    match task {
        TaskKind::Components => None,
        TaskKind::Placeholders => Some(0.0),
    }
}

/// Build the chat request: task instruction first, then the template verbatim.
/// An empty template is forwarded as-is.
pub fn build_request(task: TaskKind, template: &str, model_override: Option<&str>) -> ChatRequest {
    let model = model_override.unwrap_or_else(|| task.default_model());

    let mut request = ChatRequest::new(
        model,
        vec![
            Message::system(instruction_for(task)),
            Message::user(template),
        ],
    );
    request.temperature = temperature_for(task);
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SONGS: &str = "Recommend {num_songs} songs as JSON with title and artist.";

    #[test]
    fn test_instruction_then_template_for_both_tasks() {
        for task in [TaskKind::Components, TaskKind::Placeholders] {
            let request = build_request(task, SONGS, None);

            assert_eq!(request.messages.len(), 2);
            assert_eq!(request.messages[0], Message::system(instruction_for(task)));
            assert_eq!(request.messages[1], Message::user(SONGS));
        }
    }

    #[test]
    fn test_template_is_not_escaped_or_trimmed() {
        let template = "  Line one\n\t\"quoted\" {{var}} \\n $dollar ünïcödé  ";
        let request = build_request(TaskKind::Components, template, None);

        assert_eq!(request.messages[1].content, template);
    }

    #[test]
    fn test_empty_template_is_forwarded() {
        let request = build_request(TaskKind::Placeholders, "", None);
        assert_eq!(request.messages[1].content, "");
    }

    #[test]
    fn test_default_models() {
        assert_eq!(build_request(TaskKind::Components, SONGS, None).model, "llama3-70b-8192");
        assert_eq!(build_request(TaskKind::Placeholders, SONGS, None).model, "gpt-4o");
    }

    #[test]
    fn test_model_override_is_exact() {
        let request = build_request(TaskKind::Components, SONGS, Some("llama-3.1-8b-instant"));
        assert_eq!(request.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn test_temperature_per_task() {
        assert_eq!(build_request(TaskKind::Components, SONGS, None).temperature, None);
        assert_eq!(build_request(TaskKind::Placeholders, SONGS, None).temperature, Some(0.0));
    }

    #[test]
    fn test_placeholder_request_serializes_zero_temperature() {
        let value = serde_json::to_value(build_request(TaskKind::Placeholders, SONGS, None)).unwrap();
        assert_eq!(value["temperature"], serde_json::json!(0.0));

        let value = serde_json::to_value(build_request(TaskKind::Components, SONGS, None)).unwrap();
        assert!(value.get("temperature").is_none());
    }

    #[test]
    fn test_instructions_differ_per_task() {
        assert!(COMPONENTS_INSTRUCTION.contains("output format/style"));
        assert!(PLACEHOLDERS_INSTRUCTION.contains("Knowledge Input"));
        assert_ne!(instruction_for(TaskKind::Components), instruction_for(TaskKind::Placeholders));
    }

    #[test]
    fn test_backend_per_task() {
        assert_eq!(backend_for(TaskKind::Components), BackendType::Groq);
        assert_eq!(backend_for(TaskKind::Placeholders), BackendType::OpenAI);
    }
}
