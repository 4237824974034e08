//! Domain layer for role-allocator
//!
//! This crate contains the team model and the allocation logic.
//! It has no dependencies on storage, configuration or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Team
//!
//! A [`TeamAllocation`] owns [`TeamMember`]s and [`Role`]s. Each member holds
//! at most one role and each role at most one member; the link is stored on
//! both sides (`assigned_role` / `assigned_member_id`).
//!
//! Skills live in a separate [`SkillCatalog`] and are referenced by id only.
//!
//! ## Allocation
//!
//! - **Scoring**: [`skill_match_score`] rates a member against a role (0–100)
//! - **Engine**: [`allocate`] reassigns everyone under an [`AllocationMethod`]
//! - **Reconciler**: [`set_assignment`] applies one manual change

pub mod allocation;
pub mod core;
pub mod skill;
pub mod team;

// Re-export commonly used types
pub use allocation::{
    Allocation, AllocationMethod, AllocationReport, AllocationSummary, AssignmentIssue,
    PERFECT_MATCH, ScoredPair, allocate, allocate_with_rng, apply_assignment, check_assignments,
    is_consistent, rank_pairs, set_assignment, skill_match_score,
};
pub use core::{
    error::DomainError,
    ids::{AllocationId, MemberId, RoleId, SkillId},
};
pub use skill::{Skill, SkillCatalog, SkillLevel};
pub use team::{MemberSkill, Role, SkillRequirement, TeamAllocation, TeamMember};
