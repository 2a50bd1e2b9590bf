//! Command-line interface for promptsift.
//!
//! Provides the CLI commands for working with Claude Code session logs:
//! extracting prompt digests, listing and inspecting sessions, and
//! managing configuration.

use clap::ValueEnum;

/// Individual CLI command implementations.
pub mod commands;

/// Output format options for the read-only commands.
///
/// - `Text` for human-readable terminal output (default)
/// - `Json` for machine-readable output and scripting
/// - `Markdown` for the same document `extract` writes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
    /// Markdown-formatted output (for the show command).
    Markdown,
}
