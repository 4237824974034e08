//! State store port
//!
//! The state store owns the persisted [`TeamState`]. Use cases load it, hand
//! the aggregate to the domain, and save whatever comes back.

use allocator_domain::{SkillCatalog, TeamAllocation};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything a workspace persists: the team aggregate and the skill catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub allocation: TeamAllocation,
    #[serde(default)]
    pub skills: SkillCatalog,
}

impl TeamState {
    pub fn new(allocation: TeamAllocation, skills: SkillCatalog) -> Self {
        Self { allocation, skills }
    }
}

/// Errors from a state store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No team state at {0}. Run `init` first.")]
    NotFound(String),

    #[error("Team state at {location} is unreadable: {reason}")]
    Corrupt { location: String, reason: String },

    #[error("State I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for loading and saving the workspace state
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Human-readable location (path, URL, ...) for messages
    fn location(&self) -> String;

    async fn exists(&self) -> bool;

    async fn load(&self) -> Result<TeamState, StoreError>;

    async fn save(&self, state: &TeamState) -> Result<(), StoreError>;
}
