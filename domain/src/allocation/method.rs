//! Allocation method value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy used to fill roles during a full allocation.
///
/// - **Skills** (default): greedy matching on skill match score
/// - **Preferences**: members' preferred roles first, then positional fill
/// - **Random**: shuffled members paired with roles in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMethod {
    #[default]
    Skills,
    Preferences,
    Random,
}

impl AllocationMethod {
    pub const ALL: [AllocationMethod; 3] = [
        AllocationMethod::Skills,
        AllocationMethod::Preferences,
        AllocationMethod::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationMethod::Skills => "skills",
            AllocationMethod::Preferences => "preferences",
            AllocationMethod::Random => "random",
        }
    }

    /// Get a human-readable description of this method
    pub fn description(&self) -> &'static str {
        match self {
            AllocationMethod::Skills => {
                "Allocate roles based on team members' skills and role requirements."
            }
            AllocationMethod::Preferences => {
                "Allocate roles based on team members' role preferences."
            }
            AllocationMethod::Random => "Randomly allocate roles to team members.",
        }
    }

    /// Whether two runs over identical input always agree
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, AllocationMethod::Random)
    }
}

impl fmt::Display for AllocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AllocationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skills" | "skill" => Ok(AllocationMethod::Skills),
            "preferences" | "preference" | "prefs" => Ok(AllocationMethod::Preferences),
            "random" | "rand" => Ok(AllocationMethod::Random),
            _ => Err(format!(
                "Unknown allocation method: {}. Valid: skills, preferences, random",
                s
            )),
        }
    }
}
