//! Sessions command - list session logs.
//!
//! Displays the session logs found in the source directory with their
//! kept-prompt counts, newest first. Output in text or JSON format.

use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::transcript::{find_session_files, read_session};

/// Arguments for the sessions command.
#[derive(clap::Args)]
#[command(
    about = "List session logs and their prompt counts",
    after_help = "EXAMPLES:\n    \
    promptsift sessions                  List the current project's sessions\n    \
    promptsift sessions ~/logs           List sessions in a specific directory\n    \
    promptsift sessions --limit 50       Show up to 50 sessions\n    \
    promptsift sessions --format json    Output as JSON"
)]
pub struct Args {
    /// Directory containing *.jsonl session logs
    #[arg(value_name = "SOURCE_DIR")]
    pub source: Option<PathBuf>,

    /// Maximum number of sessions to display
    #[arg(short, long, default_value = "20", value_name = "N")]
    pub limit: usize,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One row of the session listing.
#[derive(Debug, Serialize)]
struct SessionRow {
    file: String,
    session_id: Option<String>,
    slug: Option<String>,
    git_branch: Option<String>,
    version: Option<String>,
    prompt_count: usize,
    first_prompt_at: Option<DateTime<Utc>>,
}

/// Executes the sessions command.
///
/// Reads every session log in the source directory and lists them newest
/// first. Listing order here is display-only; extract keeps file order.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let source = config.resolve_source(args.source)?;

    let files = find_session_files(&source)?;
    let mut rows: Vec<SessionRow> = Vec::new();

    for path in &files {
        let session = match read_session(path) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Skipping {}: {e:#}", path.display());
                continue;
            }
        };

        let first_prompt_at = session
            .prompts
            .first()
            .and_then(|p| DateTime::parse_from_rfc3339(&p.timestamp).ok())
            .map(|t| t.with_timezone(&Utc));

        rows.push(SessionRow {
            file: path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            session_id: session.info.as_ref().map(|i| i.session_id.clone()),
            slug: session.info.as_ref().and_then(|i| i.slug.clone()),
            git_branch: session.info.as_ref().and_then(|i| i.git_branch.clone()),
            version: session.info.as_ref().and_then(|i| i.version.clone()),
            prompt_count: session.prompts.len(),
            first_prompt_at,
        });
    }

    rows.sort_by(|a, b| b.first_prompt_at.cmp(&a.first_prompt_at));
    rows.truncate(args.limit);

    if rows.is_empty() {
        println!("{}", "No session logs found.".dimmed());
        println!();
        println!(
            "Looked in: {}\nPass a source directory, or run '{}' to see where promptsift looks.",
            source.display(),
            "promptsift config".cyan()
        );
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows)?;
            println!("{json}");
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            // Column widths for consistent alignment
            const ID_WIDTH: usize = 12;
            const TIME_WIDTH: usize = 16;
            const PROMPTS_WIDTH: usize = 7;
            const SLUG_WIDTH: usize = 32;

            println!(
                "{}",
                format!(
                    "{:<ID_WIDTH$}  {:<TIME_WIDTH$}  {:>PROMPTS_WIDTH$}  {:<SLUG_WIDTH$}  {}",
                    "ID", "FIRST PROMPT", "PROMPTS", "SLUG", "BRANCH"
                )
                .bold()
            );

            for row in &rows {
                let id = row.session_id.as_deref().unwrap_or(&row.file);
                let id_short = short_id(id);
                let time = row
                    .first_prompt_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "-".to_string());
                let slug = row
                    .slug
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .map(|s| truncate_slug(s, SLUG_WIDTH))
                    .unwrap_or_else(|| "-".to_string());
                let branch = row.git_branch.as_deref().unwrap_or("-");

                println!(
                    "{:<ID_WIDTH$}  {:<TIME_WIDTH$}  {:>PROMPTS_WIDTH$}  {:<SLUG_WIDTH$}  {}",
                    id_short.cyan(),
                    time.dimmed(),
                    row.prompt_count,
                    slug,
                    branch.yellow()
                );
            }
        }
    }

    Ok(())
}

/// First eight characters of an id for the table. Counted in characters,
/// not bytes; ids are not guaranteed to be ASCII.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Truncates a slug to fit within a maximum width, counting characters.
///
/// If the slug is longer than `max_width`, it is cut and "..." appended so
/// the result is at most `max_width` characters.
fn truncate_slug(s: &str, max_width: usize) -> String {
    let len = s.chars().count();
    if len <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let kept: String = s.chars().take(max_width - 3).collect();
    format!("{kept}...")
}
