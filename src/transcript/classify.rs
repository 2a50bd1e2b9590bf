//! Prompt classification
//!
//! Decides whether a record is a prompt the user actually wrote, as opposed
//! to the tool results, interruption notices, and one-keystroke confirmations
//! that also arrive with `"type": "user"`.

use super::extract::INTERRUPTED_MARKER;
use super::record::SessionRecord;

/// Anything shorter than this after trimming is a menu response ("y", "1"),
/// not a prompt.
pub const MIN_PROMPT_CHARS: usize = 2;

/// True when a record holds a genuine user-authored prompt.
///
/// `extracted` is the text produced by [`super::extract_text`] for this
/// record; length is measured in characters after trimming.
pub fn is_real_user_prompt(record: &SessionRecord, extracted: &str) -> bool {
    if record.record_type != "user" {
        return false;
    }

    // Tool results come back on user-typed records; text next to them was
    // not typed either.
    if record.content().is_some_and(|c| c.has_tool_result()) {
        return false;
    }

    let trimmed = extracted.trim();
    if trimmed.chars().count() < MIN_PROMPT_CHARS {
        return false;
    }

    if trimmed.starts_with(INTERRUPTED_MARKER) {
        return false;
    }

    true
}
