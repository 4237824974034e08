//! Team editing use case
//!
//! Member, role and skill catalog edits. Every operation is
//! load → mutate → save, and the aggregate keeps assignments consistent.

use crate::ports::event_logger::{AllocationEvent, EventLogger, NoEventLogger};
use crate::ports::state_store::{StateStore, StoreError, TeamState};
use allocator_domain::{
    DomainError, MemberId, MemberSkill, Role, RoleId, SkillId, SkillLevel, SkillRequirement,
    TeamMember,
};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum TeamEditError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Editable member fields; the id and assignment are owned by the aggregate
#[derive(Debug, Clone, Default)]
pub struct MemberDraft {
    pub name: String,
    pub skills: Vec<(SkillId, SkillLevel)>,
    pub preferred_roles: Vec<RoleId>,
    pub avatar: Option<String>,
}

impl MemberDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_skill(mut self, skill: impl Into<SkillId>, level: SkillLevel) -> Self {
        self.skills.push((skill.into(), level));
        self
    }

    pub fn with_preference(mut self, role: impl Into<RoleId>) -> Self {
        self.preferred_roles.push(role.into());
        self
    }

    fn into_member(self, id: MemberId) -> TeamMember {
        TeamMember {
            id,
            name: self.name.trim().to_string(),
            skills: self
                .skills
                .into_iter()
                .map(|(skill_id, level)| MemberSkill { skill_id, level })
                .collect(),
            preferred_roles: self.preferred_roles,
            assigned_role: None,
            avatar: self.avatar,
        }
    }
}

/// Editable role fields
#[derive(Debug, Clone, Default)]
pub struct RoleDraft {
    pub name: String,
    pub description: String,
    pub requirements: Vec<SkillRequirement>,
    pub color: Option<String>,
}

impl RoleDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_requirement(
        mut self,
        skill: impl Into<SkillId>,
        min_level: Option<SkillLevel>,
    ) -> Self {
        self.requirements.push(SkillRequirement {
            skill_id: skill.into(),
            min_level,
        });
        self
    }

    fn into_role(self, id: RoleId) -> Role {
        Role {
            id,
            name: self.name.trim().to_string(),
            description: self.description,
            required_skills: self.requirements,
            assigned_member_id: None,
            color: self.color,
        }
    }
}

/// Use case for editing members, roles, skills and the team name
pub struct ManageTeamUseCase<S: StateStore + 'static> {
    store: Arc<S>,
    event_logger: Arc<dyn EventLogger>,
}

impl<S: StateStore + 'static> ManageTeamUseCase<S> {
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

    async fn edit<T>(
        &self,
        event_type: &'static str,
        mutate: impl FnOnce(&mut TeamState) -> Result<(T, Value), DomainError>,
    ) -> Result<T, TeamEditError> {
        let mut state = self.store.load().await?;
        let (result, payload) = mutate(&mut state)?;
        self.store.save(&state).await?;
        self.event_logger
            .log(AllocationEvent::new(event_type, payload));
        Ok(result)
    }

    // ==================== Members ====================

    pub async fn add_member(&self, draft: MemberDraft) -> Result<MemberId, TeamEditError> {
        self.edit("member_added", |state| {
            ensure_skills_known(state, &draft.skills)?;
            let member = draft.into_member(MemberId::generate());
            let id = member.id.clone();
            info!("Adding member {} ({})", member.name, id);
            state.allocation.add_member(member)?;
            Ok((id.clone(), json!({ "member": id })))
        })
        .await
    }

    pub async fn update_member(&self, id: &MemberId, draft: MemberDraft) -> Result<(), TeamEditError> {
        self.edit("member_updated", |state| {
            ensure_skills_known(state, &draft.skills)?;
            state.allocation.update_member(draft.into_member(id.clone()))?;
            Ok(((), json!({ "member": id })))
        })
        .await
    }

    pub async fn remove_member(&self, id: &MemberId) -> Result<TeamMember, TeamEditError> {
        self.edit("member_removed", |state| {
            let removed = state.allocation.remove_member(id)?;
            if let Some(role) = &removed.assigned_role {
                info!("Role {} is now unfilled", role);
            }
            Ok((removed, json!({ "member": id })))
        })
        .await
    }

    /// Replace a member's preferred roles, most preferred first.
    ///
    /// Unknown role ids are stored as given; the engine skips them.
    pub async fn set_preferences(
        &self,
        id: &MemberId,
        roles: Vec<RoleId>,
    ) -> Result<(), TeamEditError> {
        self.edit("preferences_set", |state| {
            for role in roles.iter().filter(|r| state.allocation.find_role(r).is_none()) {
                warn!("Preferred role {} does not exist", role);
            }
            let mut member = state
                .allocation
                .find_member(id)
                .cloned()
                .ok_or_else(|| DomainError::MemberNotFound(id.clone()))?;
            member.preferred_roles = roles;
            let payload = json!({ "member": id, "preferredRoles": member.preferred_roles });
            state.allocation.update_member(member)?;
            Ok(((), payload))
        })
        .await
    }

    // ==================== Roles ====================

    pub async fn add_role(&self, draft: RoleDraft) -> Result<RoleId, TeamEditError> {
        self.edit("role_added", |state| {
            let role = draft.into_role(RoleId::generate());
            let id = role.id.clone();
            info!("Adding role {} ({})", role.name, id);
            state.allocation.add_role(role)?;
            Ok((id.clone(), json!({ "role": id })))
        })
        .await
    }

    pub async fn update_role(&self, id: &RoleId, draft: RoleDraft) -> Result<(), TeamEditError> {
        self.edit("role_updated", |state| {
            state.allocation.update_role(draft.into_role(id.clone()))?;
            Ok(((), json!({ "role": id })))
        })
        .await
    }

    pub async fn remove_role(&self, id: &RoleId) -> Result<Role, TeamEditError> {
        self.edit("role_removed", |state| {
            let removed = state.allocation.remove_role(id)?;
            if let Some(member) = &removed.assigned_member_id {
                info!("Member {} is now unassigned", member);
            }
            Ok((removed, json!({ "role": id })))
        })
        .await
    }

    // ==================== Skills ====================

    pub async fn add_skill(&self, name: &str) -> Result<SkillId, TeamEditError> {
        self.edit("skill_added", |state| {
            let id = state.skills.add(name)?;
            Ok((id.clone(), json!({ "skill": id, "name": name.trim() })))
        })
        .await
    }

    pub async fn rename_skill(&self, id: &SkillId, name: &str) -> Result<(), TeamEditError> {
        self.edit("skill_renamed", |state| {
            state.skills.rename(id, name)?;
            Ok(((), json!({ "skill": id, "name": name.trim() })))
        })
        .await
    }

    /// Remove a skill from the catalog.
    ///
    /// Members and roles keep their references; they show as unknown skills.
    pub async fn remove_skill(&self, id: &SkillId) -> Result<(), TeamEditError> {
        self.edit("skill_removed", |state| {
            state.skills.remove(id)?;
            let still_used = state
                .allocation
                .members
                .iter()
                .any(|m| m.level_of(id).is_some())
                || state
                    .allocation
                    .roles
                    .iter()
                    .any(|r| r.required_skills.iter().any(|req| &req.skill_id == id));
            if still_used {
                warn!("Skill {} is still referenced by members or roles", id);
            }
            Ok(((), json!({ "skill": id })))
        })
        .await
    }

    // ==================== Team ====================

    pub async fn rename_team(&self, name: &str) -> Result<(), TeamEditError> {
        self.edit("team_renamed", |state| {
            let name = name.trim();
            if name.is_empty() {
                return Err(DomainError::EmptyName("Team name"));
            }
            state.allocation.name = name.to_string();
            Ok(((), json!({ "name": name })))
        })
        .await
    }
}

fn ensure_skills_known(
    state: &TeamState,
    skills: &[(SkillId, SkillLevel)],
) -> Result<(), DomainError> {
    match skills.iter().find(|(id, _)| !state.skills.contains(id)) {
        Some((id, _)) => Err(DomainError::SkillNotFound(id.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MemoryStore, RecordingLogger};
    use allocator_domain::{AllocationMethod, check_assignments};

    fn level(v: u8) -> SkillLevel {
        SkillLevel::try_new(v).unwrap()
    }

    #[tokio::test]
    async fn test_add_member_gets_fresh_id() {
        let store = Arc::new(MemoryStore::sample());
        let logger = Arc::new(RecordingLogger::default());
        let use_case = ManageTeamUseCase::new(store.clone()).with_event_logger(logger.clone());

        let id = use_case
            .add_member(
                MemberDraft::new("  Robin Park ")
                    .with_skill("s2", level(4))
                    .with_preference("r3"),
            )
            .await
            .unwrap();

        assert_eq!(id.as_str().len(), 9);
        let saved = store.snapshot();
        let member = saved.allocation.find_member(&id).unwrap();
        assert_eq!(member.name, "Robin Park");
        assert_eq!(member.level_of(&SkillId::new("s2")), Some(level(4)));
        assert_eq!(logger.types(), vec!["member_added"]);
    }

    #[tokio::test]
    async fn test_add_member_with_unknown_skill() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = ManageTeamUseCase::new(store.clone());

        let err = use_case
            .add_member(MemberDraft::new("Robin").with_skill("s99", level(2)))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TeamEditError::Domain(DomainError::SkillNotFound(_))
        ));
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_add_member_with_duplicate_skill() {
        let use_case = ManageTeamUseCase::new(Arc::new(MemoryStore::sample()));

        let err = use_case
            .add_member(
                MemberDraft::new("Robin")
                    .with_skill("s1", level(2))
                    .with_skill("s1", level(3)),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TeamEditError::Domain(DomainError::DuplicateMemberSkill { .. })
        ));
    }

    #[tokio::test]
    async fn test_remove_assigned_member_keeps_invariant() {
        let store = Arc::new(MemoryStore::sample());
        let mut state = store.load().await.unwrap();
        state.allocation.allocate(AllocationMethod::Skills);
        store.save(&state).await.unwrap();

        let use_case = ManageTeamUseCase::new(store.clone());
        let removed = use_case.remove_member(&MemberId::new("m3")).await.unwrap();

        assert_eq!(removed.assigned_role, Some(RoleId::new("r1")));
        let saved = store.snapshot();
        assert!(!saved.allocation.find_role(&RoleId::new("r1")).unwrap().is_filled());
        assert!(check_assignments(&saved.allocation.members, &saved.allocation.roles).is_empty());
    }

    #[tokio::test]
    async fn test_set_preferences_allows_unknown_roles() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = ManageTeamUseCase::new(store.clone());

        use_case
            .set_preferences(
                &MemberId::new("m1"),
                vec![RoleId::new("r99"), RoleId::new("r5")],
            )
            .await
            .unwrap();

        let saved = store.snapshot();
        let member = saved.allocation.find_member(&MemberId::new("m1")).unwrap();
        assert_eq!(
            member.preferred_roles,
            vec![RoleId::new("r99"), RoleId::new("r5")]
        );
        assert_eq!(member.name, "Alex Johnson");
    }

    #[tokio::test]
    async fn test_update_member_keeps_assignment() {
        let store = Arc::new(MemoryStore::sample());
        let mut state = store.load().await.unwrap();
        state.allocation.allocate(AllocationMethod::Skills);
        store.save(&state).await.unwrap();

        let use_case = ManageTeamUseCase::new(store.clone());
        use_case
            .update_member(
                &MemberId::new("m1"),
                MemberDraft::new("Alex J.").with_skill("s1", level(5)),
            )
            .await
            .unwrap();

        let saved = store.snapshot();
        let member = saved.allocation.find_member(&MemberId::new("m1")).unwrap();
        assert_eq!(member.name, "Alex J.");
        assert_eq!(member.assigned_role, Some(RoleId::new("r2")));
    }

    #[tokio::test]
    async fn test_role_lifecycle() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = ManageTeamUseCase::new(store.clone());

        let id = use_case
            .add_role(RoleDraft::new("Data Analyst").with_requirement("s5", Some(level(3))))
            .await
            .unwrap();
        use_case
            .update_role(
                &id,
                RoleDraft::new("Data Scientist").with_requirement("s5", Some(level(4))),
            )
            .await
            .unwrap();
        assert_eq!(
            store.snapshot().allocation.find_role(&id).unwrap().name,
            "Data Scientist"
        );

        let removed = use_case.remove_role(&id).await.unwrap();
        assert_eq!(removed.name, "Data Scientist");
        assert!(store.snapshot().allocation.find_role(&id).is_none());
    }

    #[tokio::test]
    async fn test_skill_catalog_edits() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = ManageTeamUseCase::new(store.clone());

        let id = use_case.add_skill("Machine Learning").await.unwrap();
        use_case.rename_skill(&id, "ML").await.unwrap();
        assert_eq!(store.snapshot().skills.name_of(&id), Some("ML"));

        // Removing a referenced skill leaves member data untouched
        use_case.remove_skill(&SkillId::new("s1")).await.unwrap();
        let saved = store.snapshot();
        assert!(!saved.skills.contains(&SkillId::new("s1")));
        let alex = saved.allocation.find_member(&MemberId::new("m1")).unwrap();
        assert!(alex.level_of(&SkillId::new("s1")).is_some());
    }

    #[tokio::test]
    async fn test_rename_team_rejects_blank() {
        let store = Arc::new(MemoryStore::sample());
        let use_case = ManageTeamUseCase::new(store.clone());

        assert!(use_case.rename_team("   ").await.is_err());
        use_case.rename_team("Platform").await.unwrap();
        assert_eq!(store.snapshot().allocation.name, "Platform");
    }
}
