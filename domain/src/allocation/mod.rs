//! Allocation domain
//!
//! - [`scoring`]: skill match score between one member and one role
//! - [`engine`]: full reassignment under an [`AllocationMethod`]
//! - [`reconcile`]: single manual assignment that keeps links two-sided
//! - [`invariant`]: checks for broken or one-sided links
//! - [`summary`]: assigned/filled counts

pub mod engine;
pub mod invariant;
pub mod method;
pub mod reconcile;
pub mod scoring;
pub mod summary;

pub use engine::{Allocation, AllocationReport, ScoredPair, allocate, allocate_with_rng, rank_pairs};
pub use invariant::{AssignmentIssue, check_assignments, is_consistent};
pub use method::AllocationMethod;
pub use reconcile::{apply_assignment, set_assignment};
pub use scoring::{PERFECT_MATCH, skill_match_score};
pub use summary::AllocationSummary;
