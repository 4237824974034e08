//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod event_logger;
pub mod notifier;
pub mod state_store;
pub mod transfer;
