//! Wire types for Claude Code session records
//!
//! One JSONL line deserializes into one [`SessionRecord`]. Every field is
//! defaulted so a record missing a field still parses; only lines that are
//! not valid JSON objects fail.

use serde::Deserialize;

/// One line of a Claude Code session file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Record discriminator ("user", "assistant", "summary", ...). Empty
    /// when the line carries no type.
    #[serde(rename = "type", default)]
    pub record_type: String,

    #[serde(default)]
    pub session_id: Option<String>,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub git_branch: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// ISO-8601 timestamp, kept as the raw string until rendering.
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub message: Option<MessageBody>,
}

impl SessionRecord {
    /// The content carried by this record's message, if any.
    pub fn content(&self) -> Option<&ContentValue> {
        self.message.as_ref().and_then(|m| m.content.as_ref())
    }
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    #[allow(dead_code)]
    pub role: Option<String>,

    #[serde(default)]
    pub content: Option<ContentValue>,
}

/// A message's content field: a plain string, a block sequence, or some
/// other shape we treat as carrying no text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Text(String),
    Blocks(Vec<BlockValue>),
    Other(serde_json::Value),
}

impl ContentValue {
    /// True when a block sequence contains a tool_result block.
    pub fn has_tool_result(&self) -> bool {
        match self {
            ContentValue::Blocks(blocks) => blocks
                .iter()
                .any(|b| matches!(b, BlockValue::Block(ContentBlock::ToolResult))),
            _ => false,
        }
    }
}

/// One element of a content sequence. Elements that are not tagged block
/// mappings deserialize as `Other` and contribute no text; one malformed
/// element never discards its well-formed siblings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BlockValue {
    Block(ContentBlock),
    Other(serde_json::Value),
}

/// One element of a content block sequence
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    /// Presence is all that matters; the payload is ignored.
    ToolResult,
    /// thinking, tool_use, image, and whatever the format grows next.
    #[serde(other)]
    Other,
}
