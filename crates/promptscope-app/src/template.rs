use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

/// `{{name}}`, `{name}` or the literal word PLACEHOLDER. Double braces are
/// tried first so `{{x}}` is one match rather than a `{x}` inside braces.
const PLACEHOLDER_PATTERN: &str = r"(\{\{[A-Za-z0-9_.$]*\}\}|\{[A-Za-z0-9_.$]*\}|PLACEHOLDER)";
const WORD_PATTERN: &str = r"\b\w+\b";

/// Where a placeholder sits within the template, by thirds of the word count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelativePosition {
    Beginning,
    Middle,
    End,
}

impl RelativePosition {
    pub fn classify(word_index: usize, total_words: usize) -> Self {
        let index = word_index as f64;
        let third = total_words as f64 / 3.0;

        if index <= third {
            RelativePosition::Beginning
        } else if index >= third * 2.0 {
            RelativePosition::End
        } else {
            RelativePosition::Middle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMatch {
    pub placeholder: String,
    pub position: RelativePosition,
    /// Number of words preceding the placeholder
    pub word_index: usize,
}

/// Detect placeholder markers locally, in order of appearance, without any model call
pub fn scan_placeholders(template: &str) -> Result<Vec<PlaceholderMatch>> {
    let placeholder_re = Regex::new(PLACEHOLDER_PATTERN)
        .context("Failed to compile placeholder pattern")?;
    let word_re = Regex::new(WORD_PATTERN)
        .context("Failed to compile word pattern")?;

    let total_words = word_re.find_iter(template).count();

    let matches = placeholder_re
        .find_iter(template)
        .map(|m| {
            let word_index = word_re.find_iter(&template[..m.start()]).count();
            PlaceholderMatch {
                placeholder: m.as_str().to_string(),
                position: RelativePosition::classify(word_index, total_words),
                word_index,
            }
        })
        .collect();

    Ok(matches)
}
