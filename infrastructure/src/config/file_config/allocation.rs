//! Allocation configuration from TOML (`[allocation]` section)

use super::super::issue::{ConfigIssue, ConfigIssueCode};
use allocator_application::config::DEFAULT_TEAM_NAME;
use allocator_application::AllocatorConfig;
use allocator_domain::AllocationMethod;
use serde::{Deserialize, Serialize};

/// Raw allocation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAllocationConfig {
    /// Method used when `allocate` is run without `--method`
    pub default_method: String,
    /// Name for teams created by `init`
    pub team_name: String,
}

impl Default for FileAllocationConfig {
    fn default() -> Self {
        Self {
            default_method: AllocationMethod::default().as_str().to_string(),
            team_name: DEFAULT_TEAM_NAME.to_string(),
        }
    }
}

impl FileAllocationConfig {
    /// Parse default_method string into AllocationMethod
    ///
    /// Accepts: "skills", "skill", "preferences", "preference", "prefs", "random", "rand"
    pub fn parse_default_method(&self) -> (AllocationMethod, Vec<ConfigIssue>) {
        match self.default_method.parse::<AllocationMethod>() {
            Ok(method) => (method, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "allocation.default_method".to_string(),
                        value: self.default_method.clone(),
                        valid_values: AllocationMethod::ALL
                            .iter()
                            .map(|m| m.as_str().to_string())
                            .collect(),
                    },
                    format!(
                        "allocation.default_method: unknown value '{}', falling back to 'skills'",
                        self.default_method
                    ),
                );
                (AllocationMethod::default(), vec![issue])
            }
        }
    }

    pub fn parse_team_name(&self) -> (String, Vec<ConfigIssue>) {
        let name = self.team_name.trim();
        if name.is_empty() {
            let issue = ConfigIssue::warning(
                ConfigIssueCode::EmptyName {
                    field: "allocation.team_name".to_string(),
                },
                format!(
                    "allocation.team_name is blank, falling back to '{}'",
                    DEFAULT_TEAM_NAME
                ),
            );
            return (DEFAULT_TEAM_NAME.to_string(), vec![issue]);
        }
        (name.to_string(), vec![])
    }

    /// Convert to the application config, substituting defaults for bad values
    pub fn to_allocator_config(&self) -> AllocatorConfig {
        AllocatorConfig::new(self.parse_default_method().0, self.parse_team_name().0)
    }
}
