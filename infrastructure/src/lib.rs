//! Infrastructure layer for role-allocator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod store;
pub mod transfer;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileAllocationConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileStorageConfig,
};
pub use logging::JsonlEventLogger;
pub use store::JsonStateStore;
pub use transfer::JsonFileTransfer;
