//! Allocator configuration.
//!
//! [`AllocatorConfig`] carries the settings use cases need from the loaded
//! configuration file, without exposing file layout to the application layer.

use crate::use_cases::init_workspace::InitWorkspaceInput;
use crate::use_cases::run_allocation::RunAllocationInput;
use allocator_domain::AllocationMethod;

pub const DEFAULT_TEAM_NAME: &str = "My Team";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    default_method: AllocationMethod,
    team_name: String,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            default_method: AllocationMethod::default(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
        }
    }
}

impl AllocatorConfig {
    pub fn new(default_method: AllocationMethod, team_name: impl Into<String>) -> Self {
        Self {
            default_method,
            team_name: team_name.into(),
        }
    }

    // ==================== Accessors ====================

    /// Method used by `allocate` when none is given
    pub fn default_method(&self) -> AllocationMethod {
        self.default_method
    }

    /// Name given to a freshly initialised team
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    // ==================== Builder Methods ====================

    pub fn with_default_method(mut self, method: AllocationMethod) -> Self {
        self.default_method = method;
        self
    }

    pub fn with_team_name(mut self, name: impl Into<String>) -> Self {
        self.team_name = name.into();
        self
    }

    // ==================== Use Case Inputs ====================

    /// Build a run input, falling back to the configured method
    pub fn to_run_input(
        &self,
        method: Option<AllocationMethod>,
        seed: Option<u64>,
    ) -> RunAllocationInput {
        RunAllocationInput {
            method: method.unwrap_or(self.default_method),
            seed,
        }
    }

    /// Build an init input, falling back to the configured team name
    pub fn to_init_input(&self, name: Option<String>, sample: bool, force: bool) -> InitWorkspaceInput {
        InitWorkspaceInput {
            team_name: name.unwrap_or_else(|| self.team_name.clone()),
            sample,
            force,
        }
    }
}
