//! Configuration management
//!
//! Settings live in `~/.promptsift/config.yaml`. Everything is optional;
//! command-line flags win over the file, and the file wins over the
//! built-in defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output directory used when neither flag nor config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "prompts";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Directory containing `*.jsonl` session logs
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// Directory receiving the rendered markdown documents
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path. Missing or empty files mean defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
            .join(".promptsift");

        Ok(config_dir.join("config.yaml"))
    }

    /// Effective source directory: flag, then config, then the Claude Code
    /// log directory for the current project.
    pub fn resolve_source(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(expand_home(&dir));
        }
        if let Some(ref dir) = self.source_dir {
            return Ok(expand_home(dir));
        }
        default_session_dir()
    }

    /// Effective output directory: flag, then config, then `./prompts`.
    pub fn resolve_output(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_dir.clone())
            .map(|dir| expand_home(&dir))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Expands a leading `~` to the home directory, so config entries like
/// `source_dir: ~/logs` mean what they say. Other paths pass through
/// unchanged.
fn expand_home(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str() {
        if s == "~" || s.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                if s == "~" {
                    return home;
                }
                return home.join(&s[2..]);
            }
        }
    }
    path.to_path_buf()
}

/// Where Claude Code keeps session logs for the current project.
pub fn default_session_dir() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    Ok(projects_root()?.join(encode_project_dir(&cwd)))
}

/// The `~/.claude/projects` root.
pub fn projects_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
    Ok(home.join(".claude").join("projects"))
}

/// Claude Code names each project's log directory by flattening the
/// project path: every character outside `[A-Za-z0-9]` becomes `-`.
pub fn encode_project_dir(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
