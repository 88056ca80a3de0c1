use colored::Colorize;

use promptscope_models::{ChatRequest, Usage};
use crate::safe_truncate;

const MAX_LOGGED_CHARS: usize = 5000;

/// Log HTTP request details for debugging (stderr, so stdout stays clean)
pub fn log_request(url: &str, request: &ChatRequest, verbose: bool) {
    if !verbose {
        return;
    }
    eprint!("{}", format_request(url, request));
}

/// Log the completion text and metadata returned by the provider
pub fn log_response(content: &str, model: Option<&str>, usage: Option<&Usage>, verbose: bool) {
    if !verbose {
        return;
    }
    eprint!("{}", format_response(content, model, usage));
}

/// Render the request banner. The credential is never passed in here, so the
/// Authorization header is always shown masked.
pub fn format_request(url: &str, request: &ChatRequest) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "═".repeat(80).bright_cyan()));
    out.push_str(&format!("{}\n", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold()));
    out.push_str(&format!("{}\n", "═".repeat(80).bright_cyan()));

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        out.push_str(&format!("{}: {}\n", "URL".bright_yellow(), url));
        out.push_str(&format!("{}: {}\n", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown")));
        let port = parsed_url.port().map(|p| p.to_string()).unwrap_or_else(||
            if parsed_url.scheme() == "https" { "443 (default)".to_string() } else { "80 (default)".to_string() }
        );
        out.push_str(&format!("{}: {}\n", "Port".bright_yellow(), port));
        out.push_str(&format!("{}: {}\n", "Scheme".bright_yellow(), parsed_url.scheme()));
    } else {
        out.push_str(&format!("{}: {}\n", "URL".bright_yellow(), url));
    }

    out.push_str(&format!("\n{}\n", "Headers:".bright_yellow()));
    out.push_str("  Content-Type: application/json\n");
    out.push_str("  Authorization: Bearer ***\n");

    out.push_str(&format!("\n{}\n", "Request Body:".bright_yellow()));
    match serde_json::to_string_pretty(request) {
        Ok(json) => {
            // Truncate very long requests for readability
            if json.chars().count() > MAX_LOGGED_CHARS {
                out.push_str(&safe_truncate(&json, MAX_LOGGED_CHARS));
                out.push_str(&format!("\n{}\n", format!("... (truncated, total {} bytes)", json.len()).bright_black()));
            } else {
                out.push_str(&json);
                out.push('\n');
            }
        }
        Err(e) => out.push_str(&format!("{}\n", format!("Error serializing request: {}", e).red())),
    }

    out.push_str(&format!("{}\n\n", "═".repeat(80).bright_cyan()));
    out
}

pub fn format_response(content: &str, model: Option<&str>, usage: Option<&Usage>) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "═".repeat(80).bright_green()));
    out.push_str(&format!("{}\n", "📥 HTTP RESPONSE DEBUG".bright_green().bold()));
    out.push_str(&format!("{}\n", "═".repeat(80).bright_green()));

    if let Some(model) = model {
        out.push_str(&format!("{}: {}\n", "Model".bright_yellow(), model));
    }
    if let Some(usage) = usage {
        out.push_str(&format!(
            "{}: prompt={} completion={} total={}\n",
            "Tokens".bright_yellow(),
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        ));
    }

    out.push_str(&format!("\n{}\n", "Content:".bright_yellow()));
    out.push_str(&safe_truncate(content, MAX_LOGGED_CHARS));
    out.push('\n');

    out.push_str(&format!("{}\n\n", "═".repeat(80).bright_green()));
    out
}
