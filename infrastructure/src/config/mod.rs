//! Configuration file loading for role-allocator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROLE_ALLOCATOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./allocator.toml` or `./.allocator.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/role-allocator/config.toml`
//! 5. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{
    DEFAULT_STATE_FILE, FileAllocationConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileStorageConfig,
};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::ConfigLoader;
