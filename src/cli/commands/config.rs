//! Config command - view and create configuration

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use crate::config::Config;

/// Starter configuration written by `config init`. Both values are null so
/// the built-in defaults stay in effect until the user edits them.
const STARTER_CONFIG: &str = "\
# promptsift configuration
#
# Both values are optional; command-line flags override them.

# Directory containing *.jsonl session logs. When null, promptsift uses
# the Claude Code log directory for the current project.
source_dir: ~

# Directory receiving the rendered markdown documents. When null,
# promptsift writes to ./prompts.
output_dir: ~
";

#[derive(clap::Args)]
#[command(
    about = "View or create the configuration file",
    after_help = "EXAMPLES:\n    \
    promptsift config            Show the effective configuration\n    \
    promptsift config init       Write a starter config file"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(),
        Some(ConfigCommand::Init { force }) => init_config(force),
    }
}

fn show_config() -> Result<()> {
    let config_path = Config::config_path()?;
    let config = Config::load()?;

    println!("{}", "Promptsift Configuration".bold());
    println!();

    if config_path.exists() {
        println!("  {}  {}", "Config file:".dimmed(), config_path.display());
    } else {
        println!(
            "  {}  {} {}",
            "Config file:".dimmed(),
            config_path.display(),
            "(not created yet)".dimmed()
        );
    }

    println!();
    println!(
        "  {}  {}",
        "Source dir:".dimmed(),
        config.resolve_source(None)?.display()
    );
    println!(
        "  {}  {}",
        "Output dir:".dimmed(),
        config.resolve_output(None).display()
    );

    if !config_path.exists() {
        println!();
        println!(
            "Run {} to create a starter config file.",
            "promptsift config init".cyan()
        );
    }

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = Config::config_path()?;

    if path.exists() && !force {
        println!("{}", "Config file already exists.".yellow());
        println!();
        println!("  {}", path.display());
        println!();
        println!(
            "Use {} to overwrite it.",
            "promptsift config init --force".cyan()
        );
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    std::fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} {}", "Wrote".green(), path.display());
    println!();
    println!("Edit it to point promptsift at your session logs.");

    Ok(())
}
