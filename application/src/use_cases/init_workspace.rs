//! Workspace initialisation use case

use crate::ports::event_logger::{AllocationEvent, EventLogger, NoEventLogger};
use crate::ports::state_store::{StateStore, StoreError, TeamState};
use allocator_domain::TeamAllocation;
use allocator_domain::team::seed;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum InitWorkspaceError {
    #[error("A team already exists at {0}. Use --force to overwrite it.")]
    AlreadyExists(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct InitWorkspaceInput {
    pub team_name: String,
    /// Seed the five sample members and default roles
    pub sample: bool,
    pub force: bool,
}

/// Creates the persisted state for a new team.
///
/// The default skill catalog is always written; roles and members only with
/// `sample`.
pub struct InitWorkspaceUseCase<S: StateStore + 'static> {
    store: Arc<S>,
    event_logger: Arc<dyn EventLogger>,
}

impl<S: StateStore + 'static> InitWorkspaceUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            event_logger: Arc::new(NoEventLogger),
        }
    }

    pub fn with_event_logger(mut self, logger: Arc<dyn EventLogger>) -> Self {
        self.event_logger = logger;
        self
    }

    pub async fn execute(&self, input: InitWorkspaceInput) -> Result<TeamState, InitWorkspaceError> {
        if self.store.exists().await && !input.force {
            return Err(InitWorkspaceError::AlreadyExists(self.store.location()));
        }

        let allocation = if input.sample {
            seed::sample_allocation(input.team_name.clone())
        } else {
            TeamAllocation::new(input.team_name.clone())
        };
        let state = TeamState::new(allocation, seed::default_skills());
        self.store.save(&state).await?;

        info!(
            "Initialised {} at {} ({} members, {} roles)",
            state.allocation.name,
            self.store.location(),
            state.allocation.members.len(),
            state.allocation.roles.len()
        );
        self.event_logger.log(AllocationEvent::new(
            "initialised",
            json!({ "name": input.team_name, "sample": input.sample }),
        ));

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryStore;

    fn input(sample: bool, force: bool) -> InitWorkspaceInput {
        InitWorkspaceInput {
            team_name: "Platform".to_string(),
            sample,
            force,
        }
    }

    #[tokio::test]
    async fn test_init_empty_team() {
        let store = Arc::new(MemoryStore::empty());
        let state = InitWorkspaceUseCase::new(store.clone())
            .execute(input(false, false))
            .await
            .unwrap();

        assert_eq!(state.allocation.name, "Platform");
        assert!(state.allocation.members.is_empty());
        assert!(state.allocation.roles.is_empty());
        assert_eq!(state.skills.len(), 8);
        assert_eq!(store.snapshot(), state);
    }

    #[tokio::test]
    async fn test_init_sample_team() {
        let store = Arc::new(MemoryStore::empty());
        let state = InitWorkspaceUseCase::new(store)
            .execute(input(true, false))
            .await
            .unwrap();

        assert_eq!(state.allocation.members.len(), 5);
        assert_eq!(state.allocation.roles.len(), 5);
        assert!(state.allocation.members.iter().all(|m| !m.is_assigned()));
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite_without_force() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = InitWorkspaceUseCase::new(store.clone());

        let err = use_case.execute(input(false, false)).await.unwrap_err();
        assert!(matches!(err, InitWorkspaceError::AlreadyExists(_)));
        assert_eq!(store.snapshot().allocation.name, "Sample Team");

        use_case.execute(input(false, true)).await.unwrap();
        assert_eq!(store.snapshot().allocation.name, "Platform");
    }
}
