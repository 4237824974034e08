//! Core domain concepts shared across all subdomains.
//!
//! - [`ids`]: identifier value objects ([`ids::SkillId`], [`ids::MemberId`], [`ids::RoleId`])
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod ids;

/// Current time in milliseconds since the Unix epoch.
pub(crate) fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
