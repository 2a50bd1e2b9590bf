//! Content extraction
//!
//! Reduces a record's content value to the human-readable text the user
//! actually typed, dropping the synthetic notices Claude Code injects.

use super::record::{BlockValue, ContentBlock, ContentValue};

/// Prefix of the notice injected when the user interrupts a turn.
pub const INTERRUPTED_MARKER: &str = "[Request interrupted";

/// Prefix of tool-related notices ("[Tool uses were rejected]", etc.).
pub const TOOL_NOTICE_MARKER: &str = "[Tool";

/// Extract the user-authored text from a content value.
///
/// Plain strings pass through unchanged. Block sequences contribute their
/// text blocks, in order, joined with newlines; notice blocks, non-text
/// blocks, and malformed elements contribute nothing. Every other shape
/// yields an empty string.
pub fn extract_text(content: Option<&ContentValue>) -> String {
    match content {
        Some(ContentValue::Text(text)) => text.clone(),
        Some(ContentValue::Blocks(blocks)) => {
            let kept: Vec<&str> = blocks
                .iter()
                .filter_map(|block| match block {
                    BlockValue::Block(ContentBlock::Text { text }) if !is_synthetic_notice(text) => {
                        Some(text.as_str())
                    }
                    _ => None,
                })
                .collect();
            kept.join("\n")
        }
        Some(ContentValue::Other(_)) | None => String::new(),
    }
}

fn is_synthetic_notice(text: &str) -> bool {
    text.starts_with(INTERRUPTED_MARKER) || text.starts_with(TOOL_NOTICE_MARKER)
}
