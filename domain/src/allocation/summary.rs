//! Allocation progress summary

use crate::team::{Role, TeamMember};
use serde::{Deserialize, Serialize};

/// How much of the team is allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub assigned_members: usize,
    pub total_members: usize,
    pub filled_roles: usize,
    pub total_roles: usize,
}

impl AllocationSummary {
    pub fn of(members: &[TeamMember], roles: &[Role]) -> Self {
        Self {
            assigned_members: members.iter().filter(|m| m.is_assigned()).count(),
            total_members: members.len(),
            filled_roles: roles.iter().filter(|r| r.is_filled()).count(),
            total_roles: roles.len(),
        }
    }

    /// Whether an allocation run has anything to pair
    pub fn can_allocate(&self) -> bool {
        self.total_members > 0 && self.total_roles > 0
    }

    pub fn is_complete(&self) -> bool {
        self.filled_roles == self.total_roles || self.assigned_members == self.total_members
    }
}

impl std::fmt::Display for AllocationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} members assigned, {} of {} roles filled",
            self.assigned_members, self.total_members, self.filled_roles, self.total_roles
        )
    }
}
