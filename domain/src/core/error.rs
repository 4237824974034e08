//! Domain error types

use super::ids::{MemberId, RoleId, SkillId};
use thiserror::Error;

/// Domain-level errors
///
/// Only aggregate edits can fail. Scoring, allocation and reconciliation are
/// total over well-formed input and never return these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Skill level must be between 1 and 5, got {0}")]
    InvalidSkillLevel(u8),

    #[error("{0} cannot be empty")]
    EmptyName(&'static str),

    #[error("Team member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Role not found: {0}")]
    RoleNotFound(RoleId),

    #[error("Skill not found: {0}")]
    SkillNotFound(SkillId),

    #[error("Member {member} lists skill {skill} more than once")]
    DuplicateMemberSkill { member: MemberId, skill: SkillId },

    #[error("Id already in use: {0}")]
    DuplicateId(String),
}

impl DomainError {
    /// Check if this error is a lookup miss rather than invalid data
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::MemberNotFound(_)
                | DomainError::RoleNotFound(_)
                | DomainError::SkillNotFound(_)
        )
    }
}
