//! Role entity

use super::member::TeamMember;
use crate::core::error::DomainError;
use crate::core::ids::{MemberId, RoleId, SkillId};
use crate::skill::SkillLevel;
use serde::{Deserialize, Serialize};

/// A skill a role asks for
///
/// `min_level` is informational: it is shown to users but does not take part
/// in skill match scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirement {
    pub skill_id: SkillId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<SkillLevel>,
}

/// A position to fill, held by at most one member (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<SkillRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_member_id: Option<MemberId>,
    /// Display color, e.g. `#8B5CF6`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Role {
    pub fn new(
        id: impl Into<RoleId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            required_skills: Vec::new(),
            assigned_member_id: None,
            color: None,
        }
    }

    pub fn with_requirement(
        mut self,
        skill: impl Into<SkillId>,
        min_level: Option<SkillLevel>,
    ) -> Self {
        self.required_skills.push(SkillRequirement {
            skill_id: skill.into(),
            min_level,
        });
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_filled(&self) -> bool {
        self.assigned_member_id.is_some()
    }

    /// Requirements the member falls short of.
    ///
    /// A requirement is unmet when the member lacks the skill, or holds it
    /// below `min_level`. Display only; allocation never consults this.
    pub fn unmet_requirements<'a>(&'a self, member: &TeamMember) -> Vec<&'a SkillRequirement> {
        self.required_skills
            .iter()
            .filter(|req| match (member.level_of(&req.skill_id), req.min_level) {
                (None, _) => true,
                (Some(level), Some(min)) => level < min,
                (Some(_), None) => false,
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyName("Role name"));
        }
        Ok(())
    }
}
