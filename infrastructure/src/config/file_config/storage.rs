//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STATE_FILE: &str = ".role-allocator/team.json";

/// Raw storage configuration from TOML
///
/// Relative paths resolve against the working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Where the team state is persisted
    pub state_file: String,
    /// Default directory for `export`
    pub export_dir: String,
    /// JSONL allocation history; disabled when unset
    pub event_log: Option<String>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            state_file: DEFAULT_STATE_FILE.to_string(),
            export_dir: ".".to_string(),
            event_log: None,
        }
    }
}

impl FileStorageConfig {
    /// State file path; a blank setting falls back to the default
    pub fn state_path(&self) -> PathBuf {
        non_blank(&self.state_file).unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE))
    }

    /// Export directory; a blank setting falls back to the working directory
    pub fn export_path(&self) -> PathBuf {
        non_blank(&self.export_dir).unwrap_or_else(|| PathBuf::from("."))
    }

    /// History file, if enabled
    pub fn event_log_path(&self) -> Option<PathBuf> {
        self.event_log.as_deref().and_then(non_blank)
    }
}

fn non_blank(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
