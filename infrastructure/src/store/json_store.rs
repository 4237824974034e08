//! JSON file implementation of the [`StateStore`] port.
//!
//! The whole [`TeamState`] is one pretty-printed JSON document. Saves go to a
//! sibling temp file first and are renamed into place.

use allocator_application::ports::state_store::{StateStore, StoreError, TeamState};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StateStore for JsonStateStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn load(&self) -> Result<TeamState, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.location()));
            }
            Err(e) => return Err(e.into()),
        };

        let state = serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            location: self.location(),
            reason: e.to_string(),
        })?;
        debug!("Loaded team state from {}", self.path.display());
        Ok(state)
    }

    async fn save(&self, state: &TeamState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(state).map_err(|e| StoreError::Corrupt {
            location: self.location(),
            reason: e.to_string(),
        })?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        debug!("Saved team state to {}", self.path.display());
        Ok(())
    }
}
