//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-like settings stay strings here and are parsed with issues reported,
//! so a typo degrades to a default instead of failing the whole load.

mod allocation;
mod output;
mod storage;

pub use allocation::FileAllocationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use storage::{DEFAULT_STATE_FILE, FileStorageConfig};

use super::issue::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Allocation defaults
    pub allocation: FileAllocationConfig,
    /// Where state, exports and history live
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Enum parse failures (`allocation.default_method`)
    /// 2. Blank team name
    /// 3. Blank storage paths
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.allocation.parse_default_method().1);
        issues.extend(self.allocation.parse_team_name().1);

        let paths = [
            ("storage.state_file", Some(&self.storage.state_file)),
            ("storage.export_dir", Some(&self.storage.export_dir)),
            ("storage.event_log", self.storage.event_log.as_ref()),
        ];
        for (field, value) in paths {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyPath {
                        field: field.to_string(),
                    },
                    format!("{} is blank", field),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::issue::Severity;
    use allocator_domain::AllocationMethod;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[allocation]
default_method = "preferences"
team_name = "Platform"

[storage]
state_file = "data/team.json"
export_dir = "exports"
event_log = "data/history.jsonl"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.allocation.parse_default_method().0,
            AllocationMethod::Preferences
        );
        assert_eq!(config.allocation.team_name, "Platform");
        assert_eq!(config.storage.state_file, "data/team.json");
        assert_eq!(config.storage.export_dir, "exports");
        assert_eq!(
            config.storage.event_log.as_deref(),
            Some("data/history.jsonl")
        );
        assert_eq!(config.output.format, Some(FileOutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[allocation]
default_method = "random"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.allocation.default_method, "random");
        // Defaults should apply
        assert_eq!(config.allocation.team_name, "My Team");
        assert_eq!(config.storage.state_file, DEFAULT_STATE_FILE);
        assert!(config.storage.event_log.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let toml_str = r#"
[allocation]
default_method = "optimal"

[storage]
state_file = "  "
event_log = ""
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(ConfigIssue::has_errors(&issues));
        assert!(issues.iter().any(|i| i.code
            == ConfigIssueCode::EmptyPath {
                field: "storage.event_log".to_string()
            }));
    }
}
