//! Manual assignment use case
//!
//! Puts one member into one role (or empties the role) through the
//! reconciler, and reports who was moved out of the way.

use crate::ports::event_logger::{AllocationEvent, EventLogger, NoEventLogger};
use crate::ports::notifier::{AllocationNotifier, NoNotifier};
use crate::ports::state_store::{StateStore, StoreError, TeamState};
use allocator_domain::{DomainError, MemberId, RoleId};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum AssignRoleError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the AssignRole use case
#[derive(Debug, Clone)]
pub struct AssignRoleInput {
    pub role: RoleId,
    /// `None` empties the role
    pub member: Option<MemberId>,
}

impl AssignRoleInput {
    pub fn assign(role: impl Into<RoleId>, member: impl Into<MemberId>) -> Self {
        Self {
            role: role.into(),
            member: Some(member.into()),
        }
    }

    pub fn unassign(role: impl Into<RoleId>) -> Self {
        Self {
            role: role.into(),
            member: None,
        }
    }
}

/// What a manual assignment changed besides the requested link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentChange {
    pub role: RoleId,
    pub member: Option<MemberId>,
    /// Previous holder of `role`, now unassigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displaced: Option<MemberId>,
    /// Role `member` held before, now empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacated: Option<RoleId>,
}

impl AssignmentChange {
    /// True when the request matched what was already stored
    pub fn is_noop(&self, before: Option<&MemberId>) -> bool {
        self.displaced.is_none() && self.vacated.is_none() && before == self.member.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct AssignRoleOutput {
    pub change: AssignmentChange,
    pub state: TeamState,
}

/// Use case for a single manual assignment
pub struct AssignRoleUseCase<S: StateStore + 'static> {
    store: Arc<S>,
    event_logger: Arc<dyn EventLogger>,
}

impl<S: StateStore + 'static> AssignRoleUseCase<S> {
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

    pub async fn execute(&self, input: AssignRoleInput) -> Result<AssignRoleOutput, AssignRoleError> {
        self.execute_with_notifier(input, &NoNotifier).await
    }

    pub async fn execute_with_notifier(
        &self,
        input: AssignRoleInput,
        notifier: &dyn AllocationNotifier,
    ) -> Result<AssignRoleOutput, AssignRoleError> {
        let mut state = self.store.load().await?;
        let team = &mut state.allocation;

        let previous_holder = team
            .find_role(&input.role)
            .and_then(|r| r.assigned_member_id.clone());
        let previous_role = input
            .member
            .as_ref()
            .and_then(|m| team.find_member(m))
            .and_then(|m| m.assigned_role.clone());

        team.assign(&input.role, input.member.as_ref())?;

        let change = AssignmentChange {
            role: input.role.clone(),
            member: input.member.clone(),
            displaced: previous_holder.filter(|held| Some(held) != input.member.as_ref()),
            vacated: previous_role.filter(|held| held != &input.role),
        };
        debug!("Assignment change: {:?}", change);

        self.store.save(&state).await?;

        match &change.member {
            Some(member) => info!("Assigned {} to {}", member, change.role),
            None => info!("Unassigned {}", change.role),
        }
        self.event_logger.log(AllocationEvent::new(
            if change.member.is_some() {
                "assigned"
            } else {
                "unassigned"
            },
            serde_json::to_value(&change).unwrap_or_default(),
        ));
        notifier.on_assignment_changed(&change);

        Ok(AssignRoleOutput { change, state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryStore, RecordingLogger, RecordingNotifier};
    use allocator_domain::{AllocationMethod, check_assignments};

    async fn allocated_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::sample());
        let mut state = store.load().await.unwrap();
        state.allocation.allocate(AllocationMethod::Skills);
        store.save(&state).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_assign_free_member_to_empty_role() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = AssignRoleUseCase::new(store.clone());

        let output = use_case
            .execute(AssignRoleInput::assign("r2", "m1"))
            .await
            .unwrap();

        assert_eq!(output.change.displaced, None);
        assert_eq!(output.change.vacated, None);
        let saved = store.snapshot();
        let member = saved.allocation.find_member(&MemberId::new("m1")).unwrap();
        assert_eq!(member.assigned_role, Some(RoleId::new("r2")));
    }

    #[tokio::test]
    async fn test_reassign_reports_displaced_and_vacated() {
        // Skills run: m3->r1, m1->r2
        let store = allocated_store().await;
        let logger = Arc::new(RecordingLogger::default());
        let use_case = AssignRoleUseCase::new(store.clone()).with_event_logger(logger.clone());

        let output = use_case
            .execute(AssignRoleInput::assign("r1", "m1"))
            .await
            .unwrap();

        assert_eq!(output.change.displaced, Some(MemberId::new("m3")));
        assert_eq!(output.change.vacated, Some(RoleId::new("r2")));

        let saved = store.snapshot();
        let team = &saved.allocation;
        assert!(!team.find_member(&MemberId::new("m3")).unwrap().is_assigned());
        assert!(!team.find_role(&RoleId::new("r2")).unwrap().is_filled());
        assert!(check_assignments(&team.members, &team.roles).is_empty());

        assert_eq!(logger.types(), vec!["assigned"]);
        assert_eq!(logger.last_payload()["displaced"], "m3");
    }

    #[tokio::test]
    async fn test_reassign_same_pair_changes_nothing() {
        let store = allocated_store().await;
        let before = store.snapshot();
        let use_case = AssignRoleUseCase::new(store.clone());

        let output = use_case
            .execute(AssignRoleInput::assign("r1", "m3"))
            .await
            .unwrap();

        assert!(output.change.is_noop(Some(&MemberId::new("m3"))));
        assert_eq!(store.snapshot(), before);
    }

    #[tokio::test]
    async fn test_unassign() {
        let store = allocated_store().await;
        let notifier = RecordingNotifier::default();
        let use_case = AssignRoleUseCase::new(store.clone());

        let output = use_case
            .execute_with_notifier(AssignRoleInput::unassign("r1"), &notifier)
            .await
            .unwrap();

        assert_eq!(output.change.displaced, Some(MemberId::new("m3")));
        assert_eq!(notifier.messages(), vec!["assigned r1"]);
        let saved = store.snapshot();
        assert!(!saved.allocation.find_role(&RoleId::new("r1")).unwrap().is_filled());
    }

    #[tokio::test]
    async fn test_unknown_member_is_rejected_without_saving() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = AssignRoleUseCase::new(store.clone());

        let err = use_case
            .execute(AssignRoleInput::assign("r1", "m99"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AssignRoleError::Domain(DomainError::MemberNotFound(_))
        ));
        assert_eq!(store.save_count(), 0);
    }
}
