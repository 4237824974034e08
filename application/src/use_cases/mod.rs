//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod assign_role;
pub mod init_workspace;
pub mod inspect_team;
pub mod manage_team;
pub mod run_allocation;
pub mod transfer;

#[cfg(test)]
pub(crate) mod test_support;
