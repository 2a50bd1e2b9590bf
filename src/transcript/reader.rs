//! Session file reading
//!
//! Streams a session's JSONL records and folds them into the prompts the
//! user typed plus the session metadata, tolerating the malformed lines
//! that show up in real logs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::classify::is_real_user_prompt;
use super::extract::extract_text;
use super::record::SessionRecord;

/// Metadata captured from the first record carrying a session id.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub slug: Option<String>,
    pub git_branch: Option<String>,
    pub version: Option<String>,
}

/// One kept prompt, in file order.
#[derive(Debug, Clone, Serialize)]
pub struct Prompt {
    /// Trimmed prompt text.
    pub content: String,
    /// Raw timestamp string from the record; empty when absent.
    pub timestamp: String,
}

/// Everything extracted from one session file.
#[derive(Debug)]
pub struct ExtractedSession {
    pub info: Option<SessionInfo>,
    pub prompts: Vec<Prompt>,
    /// Lines that were not valid JSON and were skipped.
    pub skipped_lines: usize,
}

/// Read one session file, keeping the user's real prompts.
///
/// Lines that fail to parse are skipped and counted; an unreadable file is
/// an error. An empty prompt list is a normal outcome.
pub fn read_session(path: &Path) -> Result<ExtractedSession> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut info: Option<SessionInfo> = None;
    let mut prompts: Vec<Prompt> = Vec::new();
    let mut skipped_lines = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context(format!("Failed to read line {}", line_num + 1))?;

        if line.trim().is_empty() {
            continue;
        }

        let record: SessionRecord = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                tracing::debug!("Skipping unparseable line {}: {}", line_num + 1, e);
                skipped_lines += 1;
                continue;
            }
        };

        // Session metadata comes from the first record that names the
        // session, whatever its type; later records never overwrite it.
        if info.is_none() {
            if let Some(id) = record.session_id.as_deref().filter(|s| !s.is_empty()) {
                info = Some(SessionInfo {
                    session_id: id.to_string(),
                    slug: record.slug.clone(),
                    git_branch: record.git_branch.clone(),
                    version: record.version.clone(),
                });
            }
        }

        let text = extract_text(record.content());
        if is_real_user_prompt(&record, &text) {
            prompts.push(Prompt {
                content: text.trim().to_string(),
                timestamp: record.timestamp.unwrap_or_default(),
            });
        }
    }

    Ok(ExtractedSession {
        info,
        prompts,
        skipped_lines,
    })
}

/// List the `*.jsonl` session files directly under `dir`.
///
/// A missing directory yields an empty list, matching a project that has
/// never logged a session. Order is whatever the directory listing gives.
pub fn find_session_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        tracing::debug!("Session directory does not exist: {}", dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read session directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with(".jsonl") {
                files.push(path);
            }
        }
    }

    Ok(files)
}
