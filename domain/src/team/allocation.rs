//! Team allocation aggregate
//!
//! [`TeamAllocation`] owns its members and roles. Edits go through methods
//! here so that removing a member or role never leaves the other side
//! pointing at it.

use super::member::TeamMember;
use super::role::Role;
use crate::allocation::{AllocationMethod, AllocationReport, apply_assignment, engine};
use crate::core::current_timestamp;
use crate::core::error::DomainError;
use crate::core::ids::{AllocationId, MemberId, RoleId};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Aggregate root: a named team with its members and roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAllocation {
    #[serde(default = "AllocationId::generate")]
    pub id: AllocationId,
    pub name: String,
    /// Milliseconds since epoch of the last import/replace
    #[serde(default)]
    pub timestamp: u64,
    pub members: Vec<TeamMember>,
    pub roles: Vec<Role>,
}

impl TeamAllocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AllocationId::generate(),
            name: name.into(),
            timestamp: current_timestamp(),
            members: Vec::new(),
            roles: Vec::new(),
        }
    }

    pub fn with_members(mut self, members: Vec<TeamMember>) -> Self {
        self.members = members;
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = roles;
        self
    }

    // ==================== Lookup ====================

    pub fn find_member(&self, id: &MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn find_role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| &r.id == id)
    }

    /// The member currently filling a role, if it resolves
    pub fn assigned_member_of(&self, role: &Role) -> Option<&TeamMember> {
        role.assigned_member_id
            .as_ref()
            .and_then(|id| self.find_member(id))
    }

    // ==================== Members ====================

    pub fn add_member(&mut self, member: TeamMember) -> Result<(), DomainError> {
        member.validate()?;
        if self.find_member(&member.id).is_some() {
            return Err(DomainError::DuplicateId(member.id.to_string()));
        }
        let mut member = member;
        member.assigned_role = None;
        self.members.push(member);
        Ok(())
    }

    /// Replace a member's details.
    ///
    /// The stored assignment is kept; use [`TeamAllocation::assign`] to change it.
    pub fn update_member(&mut self, member: TeamMember) -> Result<(), DomainError> {
        member.validate()?;
        let slot = self
            .members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| DomainError::MemberNotFound(member.id.clone()))?;
        let assigned_role = slot.assigned_role.take();
        *slot = TeamMember {
            assigned_role,
            ..member
        };
        Ok(())
    }

    /// Remove a member and empty whatever role they held
    pub fn remove_member(&mut self, id: &MemberId) -> Result<TeamMember, DomainError> {
        let index = self
            .members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| DomainError::MemberNotFound(id.clone()))?;
        let removed = self.members.remove(index);
        for role in &mut self.roles {
            if role.assigned_member_id.as_ref() == Some(id) {
                role.assigned_member_id = None;
            }
        }
        Ok(removed)
    }

    // ==================== Roles ====================

    pub fn add_role(&mut self, role: Role) -> Result<(), DomainError> {
        role.validate()?;
        if self.find_role(&role.id).is_some() {
            return Err(DomainError::DuplicateId(role.id.to_string()));
        }
        let mut role = role;
        role.assigned_member_id = None;
        self.roles.push(role);
        Ok(())
    }

    /// Replace a role's details, keeping its stored assignment
    pub fn update_role(&mut self, role: Role) -> Result<(), DomainError> {
        role.validate()?;
        let slot = self
            .roles
            .iter_mut()
            .find(|r| r.id == role.id)
            .ok_or_else(|| DomainError::RoleNotFound(role.id.clone()))?;
        let assigned_member_id = slot.assigned_member_id.take();
        *slot = Role {
            assigned_member_id,
            ..role
        };
        Ok(())
    }

    /// Remove a role and unassign whoever held it
    pub fn remove_role(&mut self, id: &RoleId) -> Result<Role, DomainError> {
        let index = self
            .roles
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| DomainError::RoleNotFound(id.clone()))?;
        let removed = self.roles.remove(index);
        for member in &mut self.members {
            if member.assigned_role.as_ref() == Some(id) {
                member.assigned_role = None;
            }
        }
        Ok(removed)
    }

    // ==================== Allocation ====================

    /// Re-run the allocation engine over the whole team
    pub fn allocate(&mut self, method: AllocationMethod) -> AllocationReport {
        self.allocate_with_rng(method, &mut rand::thread_rng())
    }

    pub fn allocate_with_rng<R: Rng + ?Sized>(
        &mut self,
        method: AllocationMethod,
        rng: &mut R,
    ) -> AllocationReport {
        let result = engine::allocate_with_rng(&self.members, &self.roles, method, rng);
        self.members = result.members;
        self.roles = result.roles;
        result.report
    }

    /// Manually put `member` in `role`, or empty the role with `None`.
    ///
    /// Both ids must exist in this team.
    pub fn assign(&mut self, role: &RoleId, member: Option<&MemberId>) -> Result<(), DomainError> {
        if self.find_role(role).is_none() {
            return Err(DomainError::RoleNotFound(role.clone()));
        }
        if let Some(member) = member
            && self.find_member(member).is_none()
        {
            return Err(DomainError::MemberNotFound(member.clone()));
        }
        apply_assignment(&mut self.members, &mut self.roles, role, member);
        Ok(())
    }

    /// Adopt an imported allocation wholesale and stamp the current time
    pub fn replace_with(&mut self, imported: TeamAllocation) {
        *self = TeamAllocation {
            timestamp: current_timestamp(),
            ..imported
        };
    }
}
