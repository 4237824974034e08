//! Run allocation use case
//!
//! Loads the team, runs the allocation engine, saves the result and reports
//! what happened.

use crate::ports::event_logger::{AllocationEvent, EventLogger, NoEventLogger};
use crate::ports::notifier::{AllocationNotifier, NoNotifier};
use crate::ports::state_store::{StateStore, StoreError, TeamState};
use allocator_domain::{AllocationMethod, AllocationReport, AllocationSummary};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during an allocation run
#[derive(Error, Debug)]
pub enum RunAllocationError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the RunAllocation use case
#[derive(Debug, Clone)]
pub struct RunAllocationInput {
    pub method: AllocationMethod,
    /// Seed for the random method; `None` draws from the OS
    pub seed: Option<u64>,
}

impl RunAllocationInput {
    pub fn new(method: AllocationMethod) -> Self {
        Self { method, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Output of a successful run
#[derive(Debug, Clone)]
pub struct RunAllocationOutput {
    pub report: AllocationReport,
    pub summary: AllocationSummary,
    /// State as saved after the run
    pub state: TeamState,
}

/// Use case for a full (re)allocation of the team
pub struct RunAllocationUseCase<S: StateStore + 'static> {
    store: Arc<S>,
    event_logger: Arc<dyn EventLogger>,
}

impl<S: StateStore + 'static> RunAllocationUseCase<S> {
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

    /// Execute the use case without notifications
    pub async fn execute(
        &self,
        input: RunAllocationInput,
    ) -> Result<RunAllocationOutput, RunAllocationError> {
        self.execute_with_notifier(input, &NoNotifier).await
    }

    pub async fn execute_with_notifier(
        &self,
        input: RunAllocationInput,
        notifier: &dyn AllocationNotifier,
    ) -> Result<RunAllocationOutput, RunAllocationError> {
        let mut state = self.store.load().await?;
        let team = &mut state.allocation;

        info!(
            "Allocating {} members to {} roles using {} method",
            team.members.len(),
            team.roles.len(),
            input.method
        );
        if team.members.is_empty() || team.roles.is_empty() {
            warn!("Nothing to pair: team needs at least one member and one role");
        }

        let report = match input.seed {
            Some(seed) if input.method == AllocationMethod::Random => {
                debug!("Using seeded shuffle (seed {})", seed);
                team.allocate_with_rng(input.method, &mut StdRng::seed_from_u64(seed))
            }
            _ => team.allocate(input.method),
        };

        self.store.save(&state).await?;

        let summary = AllocationSummary::of(&state.allocation.members, &state.allocation.roles);
        info!("{} ({})", report.message(), summary);

        let pairs: Vec<_> = state
            .allocation
            .roles
            .iter()
            .filter_map(|r| {
                r.assigned_member_id
                    .as_ref()
                    .map(|m| json!({ "role": r.id, "member": m }))
            })
            .collect();
        self.event_logger.log(AllocationEvent::new(
            "allocated",
            json!({
                "method": input.method,
                "seed": input.seed,
                "assigned": report.assigned,
                "pairs": pairs,
            }),
        ));

        notifier.on_allocated(&report, &summary);

        Ok(RunAllocationOutput {
            report,
            summary,
            state,
        })
    }
}
