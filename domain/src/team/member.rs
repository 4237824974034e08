//! Team member entity

use crate::core::error::DomainError;
use crate::core::ids::{MemberId, RoleId, SkillId};
use crate::skill::SkillLevel;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A skill held by a member, with its proficiency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSkill {
    pub skill_id: SkillId,
    pub level: SkillLevel,
}

/// A person who can be allocated to at most one role (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<MemberSkill>,
    /// Preferred roles, most wanted first
    #[serde(default)]
    pub preferred_roles: Vec<RoleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role: Option<RoleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl TeamMember {
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            skills: Vec::new(),
            preferred_roles: Vec::new(),
            assigned_role: None,
            avatar: None,
        }
    }

    /// Add (or overwrite) a skill at the given level
    pub fn with_skill(mut self, skill: impl Into<SkillId>, level: SkillLevel) -> Self {
        self.set_skill(skill.into(), level);
        self
    }

    pub fn with_preference(mut self, role: impl Into<RoleId>) -> Self {
        self.preferred_roles.push(role.into());
        self
    }

    /// Set a skill level, keeping skill ids unique within the member
    pub fn set_skill(&mut self, skill_id: SkillId, level: SkillLevel) {
        match self.skills.iter_mut().find(|s| s.skill_id == skill_id) {
            Some(existing) => existing.level = level,
            None => self.skills.push(MemberSkill { skill_id, level }),
        }
    }

    /// Level held on a skill, `None` if the member does not have it
    pub fn level_of(&self, skill_id: &SkillId) -> Option<SkillLevel> {
        self.skills
            .iter()
            .find(|s| &s.skill_id == skill_id)
            .map(|s| s.level)
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_role.is_some()
    }

    /// Up to two uppercase initials, e.g. "Alex Johnson" -> "AJ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }

    /// Check the member's own fields for consistency
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName("Member name"));
        }
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(&skill.skill_id) {
                return Err(DomainError::DuplicateMemberSkill {
                    member: self.id.clone(),
                    skill: skill.skill_id.clone(),
                });
            }
        }
        Ok(())
    }
}
