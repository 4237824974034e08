//! Logging infrastructure: structured allocation history.
//!
//! Provides [`JsonlEventLogger`], an append-only JSONL writer that implements
//! the [`EventLogger`](allocator_application::EventLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlEventLogger;
