//! Application layer for role-allocator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AllocatorConfig;
pub use ports::{
    event_logger::{AllocationEvent, EventLogger, NoEventLogger},
    notifier::{AllocationNotifier, NoNotifier},
    state_store::{StateStore, StoreError, TeamState},
    transfer::{AllocationTransfer, TransferError},
};
pub use use_cases::assign_role::{
    AssignRoleError, AssignRoleInput, AssignRoleOutput, AssignRoleUseCase, AssignmentChange,
};
pub use use_cases::init_workspace::{InitWorkspaceError, InitWorkspaceInput, InitWorkspaceUseCase};
pub use use_cases::inspect_team::{InspectError, InspectTeamUseCase, MatchScore, TeamOverview};
pub use use_cases::manage_team::{ManageTeamUseCase, MemberDraft, RoleDraft, TeamEditError};
pub use use_cases::run_allocation::{
    RunAllocationError, RunAllocationInput, RunAllocationOutput, RunAllocationUseCase,
};
pub use use_cases::transfer::{TransferUseCase, TransferUseCaseError};
