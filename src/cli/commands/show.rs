//! Show command - display a single session's prompts.
//!
//! Looks a session up by file-stem prefix in the source directory and
//! prints its kept prompts.
//!
//! Supports multiple output formats:
//! - Text: colored terminal output (default)
//! - JSON: machine-readable structured output
//! - Markdown: exactly the document `extract` writes

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::render::{format_timestamp, render_markdown};
use crate::transcript::{find_session_files, read_session, ExtractedSession};

/// Arguments for the show command.
#[derive(clap::Args)]
#[command(
    about = "Display the prompts from one session",
    after_help = "EXAMPLES:\n    \
    promptsift show d5a2c91e                 View a session by ID prefix\n    \
    promptsift show d5a2c91e -f markdown     Print the markdown document\n    \
    promptsift show d5a2c91e -f json         Machine-readable output\n    \
    promptsift show abc --source ~/logs      Look in a specific directory"
)]
pub struct Args {
    /// Session ID prefix, matched against file names in the source directory
    #[arg(value_name = "SESSION")]
    pub session: String,

    /// Directory containing *.jsonl session logs
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Output format: text (default), json, or markdown
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON output structure for one session.
#[derive(Serialize)]
struct SessionOutput<'a> {
    file: &'a str,
    session: Option<&'a crate::transcript::SessionInfo>,
    prompts: &'a [crate::transcript::Prompt],
}

/// Executes the show command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let source = config.resolve_source(args.source)?;

    let files = find_session_files(&source)?;
    if files.is_empty() {
        anyhow::bail!(
            "No session logs in {}. \
             Run promptsift from a project directory, or pass --source.",
            source.display()
        );
    }

    let mut matches: Vec<PathBuf> = files
        .into_iter()
        .filter(|p| file_stem(p).starts_with(&args.session))
        .collect();

    let path = match matches.len() {
        0 => anyhow::bail!(
            "No session matching '{}'. \
             Run 'promptsift sessions' to list available sessions.",
            args.session
        ),
        1 => matches.remove(0),
        n => {
            matches.sort();
            let names: Vec<String> = matches
                .iter()
                .take(5)
                .map(|p| file_stem(p).to_string())
                .collect();
            anyhow::bail!(
                "Session prefix '{}' is ambiguous ({n} matches): {}{}",
                args.session,
                names.join(", "),
                if n > 5 { ", ..." } else { "" }
            );
        }
    };

    let session = read_session(&path)?;
    let stem = file_stem(&path).to_string();

    match args.format {
        OutputFormat::Json => {
            let output = SessionOutput {
                file: &stem,
                session: session.info.as_ref(),
                prompts: &session.prompts,
            };
            let json = serde_json::to_string_pretty(&output)?;
            println!("{json}");
        }
        OutputFormat::Markdown => {
            print!("{}", render_markdown(session.info.as_ref(), &session.prompts));
        }
        OutputFormat::Text => {
            print_session_text(&stem, &session);
        }
    }

    Ok(())
}

fn file_stem(path: &Path) -> std::borrow::Cow<'_, str> {
    path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default()
}

/// Prints session details in text format with colors.
fn print_session_text(stem: &str, session: &ExtractedSession) {
    let id = session
        .info
        .as_ref()
        .map(|i| i.session_id.as_str())
        .unwrap_or(stem);

    // Header
    println!("{} {}", "Session".bold(), id.cyan());
    println!();
    if let Some(ref info) = session.info {
        if let Some(slug) = info.slug.as_deref().filter(|s| !s.is_empty()) {
            println!("  {}  {}", "Slug:".dimmed(), slug);
        }
        if let Some(ref branch) = info.git_branch {
            println!("  {}  {}", "Branch:".dimmed(), branch);
        }
        if let Some(ref version) = info.version {
            println!("  {}  {}", "Version:".dimmed(), version);
        }
    }
    println!("  {}  {}", "Prompts:".dimmed(), session.prompts.len());

    if session.prompts.is_empty() {
        println!();
        println!("{}", "No prompts in this session.".dimmed());
        return;
    }

    println!();
    for (idx, prompt) in session.prompts.iter().enumerate() {
        let number = format!("{}.", idx + 1);
        let time = format_timestamp(&prompt.timestamp);
        if time.is_empty() {
            println!("{}", number.green().bold());
        } else {
            println!("{} {}", number.green().bold(), time.dimmed());
        }
        println!("{}", prompt.content);
        println!();
    }
}
