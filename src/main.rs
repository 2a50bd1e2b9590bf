use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod render;
mod transcript;

use cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "promptsift")]
#[command(version)]
#[command(about = "Sift your own prompts out of Claude Code session logs")]
#[command(long_about = "Promptsift reads the JSONL session logs Claude Code keeps per\n\
    project, keeps the prompts you actually typed, and writes one\n\
    readable markdown document per session.\n\n\
    Tool results, interruption notices, and one-keystroke confirmations\n\
    are filtered out; your words are kept verbatim.")]
#[command(after_help = "EXAMPLES:\n    \
    promptsift extract             Extract the current project's prompts\n    \
    promptsift sessions            List session logs and prompt counts\n    \
    promptsift show abc123         View one session's prompts\n    \
    promptsift config init         Create a starter config file\n\n\
    For more information about a command, run 'promptsift <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Extract user prompts from session logs into markdown
    Extract(commands::extract::Args),

    /// List session logs and their prompt counts
    Sessions(commands::sessions::Args),

    /// Display the prompts from one session
    Show(commands::show::Args),

    /// View or create the configuration file
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "promptsift=debug"
    } else {
        "promptsift=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Sessions(args) => commands::sessions::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            commands::completions::generate_completions(&mut cmd, args.shell);
            Ok(())
        }
    }
}
