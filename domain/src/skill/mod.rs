//! Skills and proficiency levels.

pub mod catalog;
pub mod level;

pub use catalog::{Skill, SkillCatalog};
pub use level::SkillLevel;
