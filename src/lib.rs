//! Promptsift - your prompts, out of the session logs
//!
//! Promptsift reads the JSONL session logs Claude Code keeps per project,
//! keeps the prompts the user actually typed, and renders one markdown
//! document per session.

pub mod config;
pub mod render;
pub mod transcript;
