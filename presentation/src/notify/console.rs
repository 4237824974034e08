//! Console implementation of the [`AllocationNotifier`] port

use allocator_application::AllocationNotifier;
use allocator_domain::{AllocationReport, AllocationSummary, TeamAllocation};
use colored::Colorize;
use std::path::Path;

/// Prints short status lines to stderr; command results go to stdout
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    fn emit(&self, line: String) {
        if !self.quiet {
            eprintln!("{}", line);
        }
    }
}

impl AllocationNotifier for ConsoleNotifier {
    fn on_allocated(&self, report: &AllocationReport, _summary: &AllocationSummary) {
        self.emit(format!("{} {}", "v".green().bold(), report.message()));
    }

    fn on_imported(&self, allocation: &TeamAllocation) {
        self.emit(format!(
            "{} Imported {} ({} members, {} roles)",
            "v".green().bold(),
            allocation.name.bold(),
            allocation.members.len(),
            allocation.roles.len()
        ));
    }

    fn on_import_failed(&self, reason: &str) {
        // Failures are shown even in quiet mode
        eprintln!("{} Invalid file format: {}", "x".red().bold(), reason);
    }

    fn on_exported(&self, path: &Path) {
        self.emit(format!(
            "{} Exported to {}",
            "v".green().bold(),
            path.display()
        ));
    }
}
