//! Application-level configuration.
//!
//! - [`AllocatorConfig`]: allocation defaults consumed by use cases

pub mod allocator_config;

pub use allocator_config::{AllocatorConfig, DEFAULT_TEAM_NAME};
