//! Import/export port
//!
//! Moves a [`TeamAllocation`] in and out of exchange files. Implementations
//! must reject documents missing `name`, `members` or `roles` before they
//! reach the domain.

use allocator_domain::TeamAllocation;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Import is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Import is not a valid team allocation: {0}")]
    Invalid(String),

    #[error("Transfer I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl TransferError {
    /// Whether the file was read but its content was rejected
    pub fn is_invalid_data(&self) -> bool {
        matches!(
            self,
            TransferError::MissingField(_) | TransferError::Invalid(_)
        )
    }
}

#[async_trait]
pub trait AllocationTransfer: Send + Sync {
    /// Read and validate an exchange file
    async fn import(&self, path: &Path) -> Result<TeamAllocation, TransferError>;

    /// Write the allocation into `dir`, returning the file written
    async fn export(
        &self,
        allocation: &TeamAllocation,
        dir: &Path,
    ) -> Result<PathBuf, TransferError>;
}
