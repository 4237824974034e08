//! Team members, roles and the allocation aggregate.

pub mod allocation;
pub mod member;
pub mod role;
pub mod seed;

pub use allocation::TeamAllocation;
pub use member::{MemberSkill, TeamMember};
pub use role::{Role, SkillRequirement};
