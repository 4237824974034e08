//! Skill catalog
//!
//! Skills live outside the team aggregate. Members and roles refer to them by
//! id only, and removing a skill here leaves those references dangling.

use crate::core::error::DomainError;
use crate::core::ids::SkillId;
use serde::{Deserialize, Serialize};

/// A named skill (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

impl Skill {
    pub fn new(id: impl Into<SkillId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Ordered collection of skills
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    /// Add a skill with a freshly generated id
    pub fn add(&mut self, name: impl Into<String>) -> Result<SkillId, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName("Skill name"));
        }
        let id = SkillId::generate();
        self.skills.push(Skill::new(id.clone(), name.trim()));
        Ok(id)
    }

    /// Insert a skill with a caller-chosen id
    pub fn insert(&mut self, skill: Skill) -> Result<(), DomainError> {
        if self.contains(&skill.id) {
            return Err(DomainError::DuplicateId(skill.id.to_string()));
        }
        self.skills.push(skill);
        Ok(())
    }

    pub fn rename(&mut self, id: &SkillId, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName("Skill name"));
        }
        let skill = self
            .skills
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| DomainError::SkillNotFound(id.clone()))?;
        skill.name = name.trim().to_string();
        Ok(())
    }

    /// Remove a skill. References held by members and roles are left as-is.
    pub fn remove(&mut self, id: &SkillId) -> Result<Skill, DomainError> {
        let index = self
            .skills
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| DomainError::SkillNotFound(id.clone()))?;
        Ok(self.skills.remove(index))
    }

    pub fn get(&self, id: &SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| &s.id == id)
    }

    /// Display name for a skill id, `None` when the id dangles
    pub fn name_of(&self, id: &SkillId) -> Option<&str> {
        self.get(id).map(|s| s.name.as_str())
    }

    pub fn contains(&self, id: &SkillId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl From<Vec<Skill>> for SkillCatalog {
    fn from(skills: Vec<Skill>) -> Self {
        Self::new(skills)
    }
}
