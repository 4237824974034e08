//! Import / export use case
//!
//! Moves a [`TeamAllocation`] between the workspace and a JSON exchange file.
//! The skill catalog is workspace-local and never travels.

use crate::ports::event_logger::{AllocationEvent, EventLogger, NoEventLogger};
use crate::ports::notifier::{AllocationNotifier, NoNotifier};
use crate::ports::state_store::{StateStore, StoreError, TeamState};
use crate::ports::transfer::{AllocationTransfer, TransferError};
use allocator_domain::team::seed;
use allocator_domain::{TeamAllocation, check_assignments};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum TransferUseCaseError {
    #[error("Import failed: {0}")]
    Transfer(#[from] TransferError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Use case for importing and exporting the team
pub struct TransferUseCase<S: StateStore + 'static, T: AllocationTransfer + 'static> {
    store: Arc<S>,
    transfer: Arc<T>,
    event_logger: Arc<dyn EventLogger>,
}

impl<S: StateStore + 'static, T: AllocationTransfer + 'static> TransferUseCase<S, T> {
    pub fn new(store: Arc<S>, transfer: Arc<T>) -> Self {
        Self {
            store,
            transfer,
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn EventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub async fn import(&self, path: &Path) -> Result<TeamAllocation, TransferUseCaseError> {
        self.import_with_notifier(path, &NoNotifier).await
    }

    /// Replace the workspace team with the content of `path`.
    ///
    /// Works on an uninitialised workspace too: the default skill catalog is
    /// created alongside the imported team.
    pub async fn import_with_notifier(
        &self,
        path: &Path,
        notifier: &dyn AllocationNotifier,
    ) -> Result<TeamAllocation, TransferUseCaseError> {
        let imported = match self.transfer.import(path).await {
            Ok(allocation) => allocation,
            Err(e) => {
                warn!("Rejected import from {}: {}", path.display(), e);
                notifier.on_import_failed(&e.to_string());
                return Err(e.into());
            }
        };

        let issues = check_assignments(&imported.members, &imported.roles);
        for issue in &issues {
            warn!("Imported allocation is inconsistent: {}", issue);
        }

        let mut state = if self.store.exists().await {
            self.store.load().await?
        } else {
            info!("No workspace yet, creating one from the import");
            TeamState::new(TeamAllocation::new(imported.name.clone()), seed::default_skills())
        };
        state.allocation.replace_with(imported);
        self.store.save(&state).await?;

        info!(
            "Imported {} ({} members, {} roles)",
            state.allocation.name,
            state.allocation.members.len(),
            state.allocation.roles.len()
        );
        self.event_logger.log(AllocationEvent::new(
            "imported",
            json!({
                "source": path.display().to_string(),
                "name": state.allocation.name,
                "members": state.allocation.members.len(),
                "roles": state.allocation.roles.len(),
                "issues": issues.len(),
            }),
        ));
        notifier.on_imported(&state.allocation);

        Ok(state.allocation)
    }

    pub async fn export(&self, dir: &Path) -> Result<PathBuf, TransferUseCaseError> {
        self.export_with_notifier(dir, &NoNotifier).await
    }

    /// Write the current team to a dated exchange file in `dir`
    pub async fn export_with_notifier(
        &self,
        dir: &Path,
        notifier: &dyn AllocationNotifier,
    ) -> Result<PathBuf, TransferUseCaseError> {
        let state = self.store.load().await?;
        let path = self.transfer.export(&state.allocation, dir).await?;

        info!("Exported {} to {}", state.allocation.name, path.display());
        self.event_logger.log(AllocationEvent::new(
            "exported",
            json!({ "path": path.display().to_string() }),
        ));
        notifier.on_exported(&path);

        Ok(path)
    }
}
