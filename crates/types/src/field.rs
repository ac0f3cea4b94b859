//! Field descriptors produced from field data plugins

use serde::{Deserialize, Serialize};

use crate::Backend;

/// A bugzilla custom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BugzillaField {
    /// Human readable name
    pub name: String,
    /// Name of the field in the bugzilla API
    pub bugzilla_field_name: String,
}

/// A jira custom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JiraField {
    /// Human readable name
    pub name: String,
    /// Jira field id, e.g. `customfield_12345`
    pub jira_field_id: String,
}

/// A field belonging to either backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Field {
    Bugzilla(BugzillaField),
    Jira(JiraField),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Bugzilla(field) => &field.name,
            Field::Jira(field) => &field.name,
        }
    }

    /// Identifier used by the owning backend's API
    pub fn backend_id(&self) -> &str {
        match self {
            Field::Bugzilla(field) => &field.bugzilla_field_name,
            Field::Jira(field) => &field.jira_field_id,
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Field::Bugzilla(_) => Backend::Bugzilla,
            Field::Jira(_) => Backend::Jira,
        }
    }
}

/// Layout of a field data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDataSet {
    pub bugzilla_field_data: Vec<BugzillaField>,
    pub jira_field_data: Vec<JiraField>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_data_set_rejects_extra_keys() {
        let data = json!({
            "bugzilla_field_data": [],
            "jira_field_data": [],
            "other_field_data": []
        });
        assert!(serde_json::from_value::<FieldDataSet>(data).is_err());
    }

    #[test]
    fn test_field_data_set_requires_both_lists() {
        assert!(serde_json::from_value::<FieldDataSet>(json!({})).is_err());
        assert!(serde_json::from_value::<FieldDataSet>(json!({"jira_field_data": []})).is_err());
    }

    #[test]
    fn test_field_accessors() {
        let field = Field::Jira(JiraField {
            name: "Story Points".to_string(),
            jira_field_id: "customfield_10002".to_string(),
        });
        assert_eq!(field.name(), "Story Points");
        assert_eq!(field.backend_id(), "customfield_10002");
        assert_eq!(field.backend(), Backend::Jira);
    }
}
