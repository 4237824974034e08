//! JSON exchange files for [`TeamAllocation`].
//!
//! Export writes `team-allocation-YYYY-MM-DD.json` (UTC date). Import checks
//! the required top-level fields before handing the document to serde, so a
//! file missing `roles` is reported as such rather than as a serde error.

use allocator_application::ports::transfer::{AllocationTransfer, TransferError};
use allocator_domain::TeamAllocation;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

const REQUIRED_FIELDS: [(&str, fn(&Value) -> bool); 3] = [
    ("name", |v: &Value| v.as_str().is_some_and(|s| !s.is_empty())),
    ("members", Value::is_array),
    ("roles", Value::is_array),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFileTransfer;

impl JsonFileTransfer {
    pub fn new() -> Self {
        Self
    }

    /// File name used for an export made on `date`
    pub fn export_file_name(date: NaiveDate) -> String {
        format!("team-allocation-{}.json", date.format("%Y-%m-%d"))
    }

    /// Validate and decode an exchange document
    pub fn parse(content: &str) -> Result<TeamAllocation, TransferError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| TransferError::Invalid(e.to_string()))?;
        let Some(object) = value.as_object() else {
            return Err(TransferError::Invalid(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        for (field, has_type) in REQUIRED_FIELDS {
            match object.get(field) {
                Some(v) if has_type(v) => {}
                _ => return Err(TransferError::MissingField(field)),
            }
        }

        serde_json::from_value(value).map_err(|e| TransferError::Invalid(e.to_string()))
    }
}

#[async_trait]
impl AllocationTransfer for JsonFileTransfer {
    async fn import(&self, path: &Path) -> Result<TeamAllocation, TransferError> {
        let content = tokio::fs::read_to_string(path).await?;
        let allocation = Self::parse(&content)?;
        debug!(
            "Parsed {} with {} members and {} roles",
            path.display(),
            allocation.members.len(),
            allocation.roles.len()
        );
        Ok(allocation)
    }

    async fn export(
        &self,
        allocation: &TeamAllocation,
        dir: &Path,
    ) -> Result<PathBuf, TransferError> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(Self::export_file_name(chrono::Utc::now().date_naive()));

        let json = serde_json::to_string_pretty(allocation)
            .map_err(|e| TransferError::Invalid(e.to_string()))?;
        tokio::fs::write(&path, json).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use allocator_domain::team::seed;
    use allocator_domain::{AllocationMethod, RoleId};

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            JsonFileTransfer::export_file_name(date),
            "team-allocation-2026-03-07.json"
        );
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let cases = [
            (r#"{"members":[],"roles":[]}"#, "name"),
            (r#"{"name":"","members":[],"roles":[]}"#, "name"),
            (r#"{"name":7,"members":[],"roles":[]}"#, "name"),
            (r#"{"name":"T","roles":[]}"#, "members"),
            (r#"{"name":"T","members":[]}"#, "roles"),
            (r#"{"name":"T","members":[],"roles":{}}"#, "roles"),
        ];
        for (content, field) in cases {
            match JsonFileTransfer::parse(content) {
                Err(TransferError::MissingField(missing)) => assert_eq!(missing, field),
                other => panic!("expected missing {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = JsonFileTransfer::parse("name: T").unwrap_err();
        assert!(err.is_invalid_data());

        let err = JsonFileTransfer::parse("[1, 2]").unwrap_err();
        assert!(matches!(err, TransferError::Invalid(_)));
    }

    #[test]
    fn test_parse_rejects_bad_skill_level() {
        let content = r#"{
            "name": "T",
            "members": [{"id": "m1", "name": "A", "skills": [{"skillId": "s1", "level": 9}]}],
            "roles": []
        }"#;
        assert!(matches!(
            JsonFileTransfer::parse(content),
            Err(TransferError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_minimal_document() {
        let content = r#"{
            "name": "Imported",
            "members": [{"id": "m1", "name": "Casey", "assignedRole": "r1"}],
            "roles": [{"id": "r1", "name": "Lead", "assignedMemberId": "m1"}]
        }"#;
        let allocation = JsonFileTransfer::parse(content).unwrap();
        assert_eq!(allocation.name, "Imported");
        assert_eq!(allocation.members[0].assigned_role, Some(RoleId::new("r1")));
        assert!(allocation.members[0].skills.is_empty());
    }

    #[tokio::test]
    async fn test_export_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let mut allocation = seed::sample_allocation("Round Trip");
        allocation.allocate(AllocationMethod::Preferences);

        let transfer = JsonFileTransfer::new();
        let path = transfer
            .export(&allocation, &dir.path().join("exports"))
            .await
            .unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("team-allocation-"));
        assert!(name.ends_with(".json"));

        let imported = transfer.import(&path).await.unwrap();
        assert_eq!(imported, allocation);
    }

    #[tokio::test]
    async fn test_import_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileTransfer::new()
            .import(&dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::Io(_)));
        assert!(!err.is_invalid_data());
    }
}
