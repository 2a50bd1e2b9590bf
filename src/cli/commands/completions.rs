//! Completions command - generate shell completion scripts.
//!
//! Generates shell completion scripts that enable tab-completion of
//! promptsift commands and options.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(
    about = "Generate shell completion scripts",
    after_help = "EXAMPLES:\n    \
    promptsift completions bash > ~/.local/share/bash-completion/completions/promptsift\n    \
    promptsift completions zsh > ~/.zfunc/_promptsift\n    \
    promptsift completions fish > ~/.config/fish/completions/promptsift.fish"
)]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generates completions using a provided clap Command.
///
/// Called from main.rs, which has access to the full Cli definition.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "promptsift", &mut io::stdout());
}
