//! Port for structured allocation history.
//!
//! Defines the [`EventLogger`] trait for recording what changed the team
//! (allocation runs, manual assignments, imports, edits) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps a machine-readable
//! history (JSONL).

use serde_json::Value;

/// A structured allocation event for logging.
pub struct AllocationEvent {
    /// Event type identifier (e.g., "allocated", "assigned", "imported").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AllocationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging allocation events.
///
/// `log` is synchronous and non-fallible; a failed write must not undo or
/// abort the change being recorded.
pub trait EventLogger: Send + Sync {
    fn log(&self, event: AllocationEvent);
}

/// No-op implementation for tests and when the history log is disabled.
pub struct NoEventLogger;

impl EventLogger for NoEventLogger {
    fn log(&self, _event: AllocationEvent) {}
}
