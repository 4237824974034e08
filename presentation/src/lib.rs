//! Presentation layer for role-allocator
//!
//! This crate contains CLI definitions, output formatters
//! and the console notifier.

pub mod cli;
pub mod config;
pub mod notify;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{
    Cli, Command, MemberArgs, MemberCommand, OutputFormat, RequirementArg, RoleArgs, RoleCommand,
    SkillArg, SkillCommand,
};
pub use config::OutputConfig;
pub use notify::console::ConsoleNotifier;
pub use output::console::ConsoleFormatter;
