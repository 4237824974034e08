//! Read-only queries over the saved team

use crate::ports::state_store::{StateStore, StoreError, TeamState};
use allocator_domain::{
    AllocationSummary, AssignmentIssue, DomainError, MemberId, RoleId, SkillRequirement,
    check_assignments, rank_pairs, skill_match_score,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Snapshot of the team with its derived figures
#[derive(Debug, Clone)]
pub struct TeamOverview {
    pub state: TeamState,
    pub summary: AllocationSummary,
    pub issues: Vec<AssignmentIssue>,
}

/// One member scored against one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub member_id: MemberId,
    pub member_name: String,
    pub role_id: RoleId,
    pub role_name: String,
    pub score: u8,
    /// Requirements the member falls below, for display
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmet: Vec<SkillRequirement>,
}

pub struct InspectTeamUseCase<S: StateStore + 'static> {
    store: Arc<S>,
}

impl<S: StateStore + 'static> InspectTeamUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn overview(&self) -> Result<TeamOverview, InspectError> {
        let state = self.store.load().await?;
        let team = &state.allocation;
        let summary = AllocationSummary::of(&team.members, &team.roles);
        let issues = check_assignments(&team.members, &team.roles);
        Ok(TeamOverview {
            state,
            summary,
            issues,
        })
    }

    /// Score a single member against a single role
    pub async fn score(&self, member: &MemberId, role: &RoleId) -> Result<MatchScore, InspectError> {
        let state = self.store.load().await?;
        let team = &state.allocation;
        let member = team
            .find_member(member)
            .ok_or_else(|| DomainError::MemberNotFound(member.clone()))?;
        let role = team
            .find_role(role)
            .ok_or_else(|| DomainError::RoleNotFound(role.clone()))?;

        Ok(MatchScore {
            member_id: member.id.clone(),
            member_name: member.name.clone(),
            role_id: role.id.clone(),
            role_name: role.name.clone(),
            score: skill_match_score(member, role),
            unmet: role.unmet_requirements(member).into_iter().cloned().collect(),
        })
    }

    /// Every member-role pair, best score first, in the order the skills
    /// method would consider them
    pub async fn ranking(&self) -> Result<Vec<MatchScore>, InspectError> {
        let state = self.store.load().await?;
        let team = &state.allocation;

        Ok(rank_pairs(&team.members, &team.roles)
            .into_iter()
            .map(|pair| {
                let member = &team.members[pair.member];
                let role = &team.roles[pair.role];
                MatchScore {
                    member_id: member.id.clone(),
                    member_name: member.name.clone(),
                    role_id: role.id.clone(),
                    role_name: role.name.clone(),
                    score: pair.score,
                    unmet: role.unmet_requirements(member).into_iter().cloned().collect(),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryStore;

    #[tokio::test]
    async fn test_score_lookup() {
        let use_case = InspectTeamUseCase::new(Arc::new(MemoryStore::sample()));

        let score = use_case
            .score(&MemberId::new("m3"), &RoleId::new("r1"))
            .await
            .unwrap();
        assert_eq!(score.score, 100);
        assert!(score.unmet.is_empty());

        let score = use_case
            .score(&MemberId::new("m3"), &RoleId::new("r2"))
            .await
            .unwrap();
        assert_eq!(score.score, 0);
        assert_eq!(score.unmet.len(), 1);
    }

    #[tokio::test]
    async fn test_score_unknown_role() {
        let use_case = InspectTeamUseCase::new(Arc::new(MemoryStore::sample()));
        let err = use_case
            .score(&MemberId::new("m1"), &RoleId::new("r99"))
            .await
            .unwrap_err();
        assert!(matches!(err, InspectError::Domain(DomainError::RoleNotFound(_))));
    }

    #[tokio::test]
    async fn test_ranking_is_sorted() {
        let use_case = InspectTeamUseCase::new(Arc::new(MemoryStore::sample()));
        let ranking = use_case.ranking().await.unwrap();

        assert_eq!(ranking.len(), 25);
        assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(ranking[0].member_id, MemberId::new("m2"));
        assert_eq!(ranking[0].role_id, RoleId::new("r3"));
    }

    #[tokio::test]
    async fn test_overview_of_fresh_sample() {
        let use_case = InspectTeamUseCase::new(Arc::new(MemoryStore::sample()));
        let overview = use_case.overview().await.unwrap();

        assert_eq!(overview.summary.total_members, 5);
        assert_eq!(overview.summary.filled_roles, 0);
        assert!(overview.issues.is_empty());
    }
}
