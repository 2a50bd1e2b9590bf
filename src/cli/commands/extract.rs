//! Extract command - write per-session prompt digests.
//!
//! Walks every `*.jsonl` session log in the source directory, keeps the
//! prompts the user actually typed, and writes one markdown document per
//! session that had any. Sessions whose document already exists are
//! skipped unless `--force` is given.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::Config;
use crate::render::render_markdown;
use crate::transcript::{find_session_files, read_session};

/// Arguments for the extract command.
#[derive(clap::Args)]
#[command(
    about = "Extract user prompts from session logs into markdown",
    long_about = "Extract user prompts from Claude Code session logs.\n\n\
        Reads every *.jsonl file in the source directory, keeps the prompts\n\
        you typed (dropping tool results, interruption notices, and\n\
        one-keystroke confirmations), and writes one markdown document per\n\
        session into the output directory.",
    after_help = "EXAMPLES:\n    \
        promptsift extract                      Extract the current project's sessions\n    \
        promptsift extract ~/logs -o digests    Explicit source and output directories\n    \
        promptsift extract --dry-run            Preview without writing anything\n    \
        promptsift extract --force              Rewrite documents that already exist"
)]
pub struct Args {
    /// Directory containing *.jsonl session logs
    #[arg(value_name = "SOURCE_DIR")]
    pub source: Option<PathBuf>,

    /// Directory to write markdown documents into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Re-extract sessions whose document already exists
    #[arg(long)]
    #[arg(long_help = "By default a session whose markdown document is already\n\
        present in the output directory is skipped on subsequent runs.\n\
        Use this flag to re-extract and overwrite those documents.")]
    pub force: bool,

    /// Preview what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

/// Tallies for one extract run.
#[derive(Debug, Default)]
struct ExtractStats {
    /// Documents written (or that would be written under --dry-run).
    written: usize,
    /// Prompts across all written documents.
    prompts: usize,
    /// Sessions that kept no prompts.
    empty: usize,
    /// Sessions skipped because their document already exists.
    skipped: usize,
    /// Session files that could not be read.
    errors: usize,
}

/// Executes the extract command.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let source = config.resolve_source(args.source)?;
    let output = config.resolve_output(args.output);

    let files = find_session_files(&source)?;
    println!(
        "Found {} session files in {}",
        files.len().to_string().green(),
        source.display()
    );

    if files.is_empty() {
        println!("  {}", "Nothing to extract".dimmed());
        return Ok(());
    }

    if !args.dry_run {
        std::fs::create_dir_all(&output)
            .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    }

    let mut stats = ExtractStats::default();

    for path in &files {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("{}", format!("Processing: {stem}").dimmed());

        let session = match read_session(path) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to read {}: {e:#}", path.display());
                println!("  {}", format!("Error: {e:#}").red());
                stats.errors += 1;
                continue;
            }
        };

        if session.skipped_lines > 0 {
            tracing::debug!(
                "{}: skipped {} unparseable lines",
                path.display(),
                session.skipped_lines
            );
        }

        if session.prompts.is_empty() {
            println!("  {}", "No prompts found".dimmed());
            stats.empty += 1;
            continue;
        }

        let doc_name = format!("{stem}.md");
        let doc_path = output.join(&doc_name);

        if !args.force && doc_path.exists() {
            println!("  {}", "Skipped (already extracted)".dimmed());
            tracing::debug!("Document already exists: {}", doc_path.display());
            stats.skipped += 1;
            continue;
        }

        if args.dry_run {
            println!(
                "  {} {} prompts to {}",
                "Would write".dimmed(),
                session.prompts.len(),
                doc_name.cyan()
            );
        } else {
            let document = render_markdown(session.info.as_ref(), &session.prompts);
            std::fs::write(&doc_path, document)
                .with_context(|| format!("Failed to write {}", doc_path.display()))?;
            println!(
                "  {} {} prompts to {}",
                "Wrote".green(),
                session.prompts.len(),
                doc_name.cyan()
            );
        }

        stats.prompts += session.prompts.len();
        stats.written += 1;
    }

    println!();

    if args.dry_run {
        println!(
            "{}",
            format!(
                "Dry run: would write {} documents ({} prompts)",
                stats.written, stats.prompts
            )
            .bold()
        );
        if stats.empty > 0 || stats.skipped > 0 || stats.errors > 0 {
            println!(
                "  ({} without prompts, {} skipped, {} errors)",
                stats.empty, stats.skipped, stats.errors
            );
        }
    } else {
        println!(
            "{}",
            format!("Wrote {} documents ({} prompts)", stats.written, stats.prompts).bold()
        );
        if stats.empty > 0 || stats.skipped > 0 || stats.errors > 0 {
            println!(
                "  ({} without prompts, {} skipped, {} errors)",
                stats.empty, stats.skipped, stats.errors
            );
        }
        println!();
        println!("Prompts written to: {}", output.display());
    }

    Ok(())
}
