//! User notification port
//!
//! Use cases report outcomes here instead of printing. The presentation layer
//! decides how (or whether) to show them.

use allocator_domain::{AllocationReport, AllocationSummary, TeamAllocation};
use std::path::Path;

use crate::use_cases::assign_role::AssignmentChange;

/// Callbacks for user-visible outcomes.
///
/// All methods default to no-ops; implement the ones you display.
pub trait AllocationNotifier: Send + Sync {
    /// Called after a full allocation run has been saved
    fn on_allocated(&self, _report: &AllocationReport, _summary: &AllocationSummary) {}

    /// Called after a manual assignment has been saved
    fn on_assignment_changed(&self, _change: &AssignmentChange) {}

    /// Called after an import replaced the team
    fn on_imported(&self, _allocation: &TeamAllocation) {}

    /// Called when an import was rejected
    fn on_import_failed(&self, _reason: &str) {}

    /// Called after the team was written to an exchange file
    fn on_exported(&self, _path: &Path) {}
}

/// No-op notifier for tests and quiet mode
pub struct NoNotifier;

impl AllocationNotifier for NoNotifier {}
