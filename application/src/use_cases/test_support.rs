//! In-memory port fakes shared by use case tests

use crate::ports::event_logger::{AllocationEvent, EventLogger};
use crate::ports::notifier::AllocationNotifier;
use crate::ports::state_store::{StateStore, StoreError, TeamState};
use crate::use_cases::assign_role::AssignmentChange;
use allocator_domain::team::seed;
use allocator_domain::{AllocationReport, AllocationSummary, TeamAllocation};
use async_trait::async_trait;
use std::sync::Mutex;

pub(crate) struct MemoryStore {
    state: Mutex<Option<TeamState>>,
    pub saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(None),
            saves: Mutex::new(0),
        }
    }

    pub fn with(state: TeamState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
            saves: Mutex::new(0),
        }
    }

    pub fn sample() -> Self {
        Self::with(TeamState::new(
            seed::sample_allocation("Sample Team"),
            seed::default_skills(),
        ))
    }

    pub fn snapshot(&self) -> TeamState {
        self.state.lock().unwrap().clone().unwrap()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn exists(&self) -> bool {
        self.state.lock().unwrap().is_some()
    }

    async fn load(&self) -> Result<TeamState, StoreError> {
        self.state
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreError::NotFound(self.location()))
    }

    async fn save(&self, state: &TeamState) -> Result<(), StoreError> {
        *self.state.lock().unwrap() = Some(state.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn last_payload(&self) -> serde_json::Value {
        self.events.lock().unwrap().last().unwrap().1.clone()
    }
}

impl EventLogger for RecordingLogger {
    fn log(&self, event: AllocationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl AllocationNotifier for RecordingNotifier {
    fn on_allocated(&self, report: &AllocationReport, _summary: &AllocationSummary) {
        self.messages.lock().unwrap().push(report.message());
    }

    fn on_assignment_changed(&self, change: &AssignmentChange) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("assigned {}", change.role));
    }

    fn on_imported(&self, allocation: &TeamAllocation) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("imported {}", allocation.name));
    }

    fn on_import_failed(&self, reason: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("import failed: {}", reason));
    }

    fn on_exported(&self, path: &std::path::Path) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("exported {}", path.display()));
    }
}
