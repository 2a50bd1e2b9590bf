//! Claude Code session transcripts
//!
//! Parses the JSONL session format used by Claude Code (as of version
//! 2.0.72) and reduces each session to the prompts the user actually
//! typed. The pipeline is extract ([`extract_text`]), classify
//! ([`is_real_user_prompt`]), collect ([`read_session`]).

mod classify;
mod extract;
mod reader;
mod record;

pub use classify::{is_real_user_prompt, MIN_PROMPT_CHARS};
pub use extract::{extract_text, INTERRUPTED_MARKER, TOOL_NOTICE_MARKER};
pub use reader::{find_session_files, read_session, ExtractedSession, Prompt, SessionInfo};
pub use record::{BlockValue, ContentBlock, ContentValue, MessageBody, SessionRecord};
