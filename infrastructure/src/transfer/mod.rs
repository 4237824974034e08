//! Exchange file adapters

mod json_transfer;

pub use json_transfer::JsonFileTransfer;
