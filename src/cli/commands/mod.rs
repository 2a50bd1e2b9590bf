//! CLI commands for promptsift.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Generate shell completion scripts.
pub mod completions;

/// Configuration viewing and management.
pub mod config;

/// Extract prompt digests from session logs.
pub mod extract;

/// List session logs and their prompt counts.
pub mod sessions;

/// Display a single session's prompts.
pub mod show;
