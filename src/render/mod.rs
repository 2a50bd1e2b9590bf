//! Markdown rendering
//!
//! Turns an extracted session into the per-session prompt document.

use chrono::DateTime;

use crate::transcript::{Prompt, SessionInfo};

/// Renders a session's kept prompts as a markdown document.
pub fn render_markdown(info: Option<&SessionInfo>, prompts: &[Prompt]) -> String {
    let slug = info
        .and_then(|i| i.slug.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown");
    let session_id = info
        .map(|i| i.session_id.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown");

    let mut output = String::new();

    // Header
    output.push_str(&format!("# Session: {slug}\n\n"));
    output.push_str(&format!("**Session ID**: `{session_id}`\n\n"));
    output.push_str("---\n\n");

    // Prompts, numbered from 1
    output.push_str("## User Prompts\n\n");
    for (idx, prompt) in prompts.iter().enumerate() {
        let time = format_timestamp(&prompt.timestamp);
        output.push_str(&format!("### {}. {}\n\n", idx + 1, time));
        output.push_str(&prompt.content);
        output.push_str("\n\n");
    }

    output
}

/// Formats a raw record timestamp as `YYYY-MM-DD HH:MM` in its own offset.
///
/// The logs write RFC 3339 with a trailing `Z`. Anything that does not
/// parse renders as an empty string; the damage stays inside one heading.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
