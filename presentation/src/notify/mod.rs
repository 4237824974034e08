//! Console notifications for use case outcomes

pub mod console;
