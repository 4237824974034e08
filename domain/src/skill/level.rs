//! Skill level value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Proficiency on a skill, from 1 (beginner) to 5 (expert).
///
/// Serialized as a bare integer. Out-of-range values are rejected on
/// deserialization, so a loaded level is always valid.
///
/// # Example
///
/// ```
/// use allocator_domain::SkillLevel;
///
/// let level = SkillLevel::try_new(4).unwrap();
/// assert_eq!(level.label(), "Advanced");
/// assert!(SkillLevel::try_new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const BEGINNER: SkillLevel = SkillLevel(1);
    pub const EXPERT: SkillLevel = SkillLevel(5);

    pub fn try_new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidSkillLevel(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Human-readable name for this level
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Basic",
            3 => "Intermediate",
            4 => "Advanced",
            _ => "Expert",
        }
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
