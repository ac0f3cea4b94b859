//! Configuration validation utilities

use crate::schema::{BackendSchema, ConfigMap, FIELD_DATA_PATH_KEY, TOP_LEVEL_KEYS, URL_KEY};
use serde_json::Value;
use types::{Backend, ConfigError, ValidationIssue};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration document
    pub fn validate(document: &Value) -> ValidationReport {
        match document.as_object() {
            Some(map) => Self::validate_map(map),
            None => {
                let mut report = ValidationReport::new();
                report.add_error(
                    "",
                    &format!("config must be a JSON object, got {}", json_type_name(document)),
                );
                report
            }
        }
    }

    /// Validate a configuration mapping
    pub fn validate_map(map: &ConfigMap) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Closed schema at the top level
        Self::validate_top_level(map, &mut report);

        // Validate each backend block
        for backend in Backend::ALL {
            Self::validate_backend(map, BackendSchema::for_backend(backend), &mut report);
        }

        // Validate optional field data path
        Self::validate_field_data_path(map, &mut report);

        report
    }

    /// Validate a mapping and turn any error into a `ConfigError`
    pub fn check_map(map: &ConfigMap) -> Result<ValidationReport, ConfigError> {
        Self::validate_map(map).into_result()
    }

    /// Validate a document and turn any error into a `ConfigError`
    pub fn check(document: &Value) -> Result<ValidationReport, ConfigError> {
        Self::validate(document).into_result()
    }

    fn validate_top_level(map: &ConfigMap, report: &mut ValidationReport) {
        for key in map.keys() {
            if !TOP_LEVEL_KEYS.iter().any(|allowed| *allowed == key) {
                report.add_error(key, "extra field not permitted");
            }
        }
    }

    fn validate_backend(map: &ConfigMap, schema: BackendSchema, report: &mut ValidationReport) {
        let section = schema.backend.config_key();

        let block = match map.get(section) {
            None => {
                report.add_error(section, "field required");
                return;
            }
            Some(Value::Object(block)) => block,
            Some(other) => {
                report.add_error(
                    section,
                    &format!("must be an object, got {}", json_type_name(other)),
                );
                return;
            }
        };

        for key in schema.required {
            let field = format!("{}.{}", section, key);
            match block.get(key) {
                None => report.add_error(&field, "field required"),
                Some(Value::String(value)) => {
                    if value.trim().is_empty() {
                        report.add_error(
                            &field,
                            "string should have at least 1 character after trimming whitespace",
                        );
                    } else if key == URL_KEY {
                        Self::validate_url(&field, value.trim(), report);
                    }
                }
                Some(other) => report.add_error(
                    &field,
                    &format!("must be a string, got {}", json_type_name(other)),
                ),
            }
        }

        for key in block.keys() {
            if !schema.allows(key) {
                report.add_error(&format!("{}.{}", section, key), "extra field not permitted");
            }
        }
    }

    fn validate_url(field: &str, url: &str, report: &mut ValidationReport) {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            report.add_warning(field, &format!("URL '{}' does not start with http:// or https://", url));
        } else if url.starts_with("http://") {
            report.add_warning(field, "URL should use HTTPS");
        }
    }

    fn validate_field_data_path(map: &ConfigMap, report: &mut ValidationReport) {
        match map.get(FIELD_DATA_PATH_KEY) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => report.add_error(
                FIELD_DATA_PATH_KEY,
                &format!("must be a string, got {}", json_type_name(other)),
            ),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validation report containing errors and warnings
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn summary(&self) -> String {
        format!("Validation: {} errors, {} warnings", self.errors.len(), self.warnings.len())
    }

    /// Fail with every collected error, or hand the report back
    pub fn into_result(self) -> Result<Self, ConfigError> {
        if self.has_errors() {
            return Err(ConfigError::Validation { issues: self.errors });
        }
        Ok(self)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_document() -> Value {
        json!({
            "bugzilla": {"URL": "https://bz.example.com", "api_key": "abc123", "field_data_plugin_name": "default"},
            "jira": {"URL": "https://jira.example.com", "token_auth": "xyz789", "field_data_plugin_name": "default"}
        })
    }

    fn error_fields(report: &ValidationReport) -> Vec<&str> {
        report.errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_document() {
        let report = ConfigValidator::validate(&valid_document());
        assert!(report.is_valid());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_missing_backend() {
        for backend in ["bugzilla", "jira"] {
            let mut document = valid_document();
            document.as_object_mut().unwrap().remove(backend);
            let report = ConfigValidator::validate(&document);
            assert_eq!(error_fields(&report), vec![backend]);
        }
    }

    #[test]
    fn test_empty_and_blank_strings() {
        let mut document = valid_document();
        document["bugzilla"]["URL"] = json!("");
        document["jira"]["token_auth"] = json!("   \t");
        let report = ConfigValidator::validate(&document);
        assert_eq!(error_fields(&report), vec!["bugzilla.URL", "jira.token_auth"]);
    }

    #[test]
    fn test_missing_nested_field() {
        let mut document = valid_document();
        document["jira"].as_object_mut().unwrap().remove("field_data_plugin_name");
        let report = ConfigValidator::validate(&document);
        assert_eq!(error_fields(&report), vec!["jira.field_data_plugin_name"]);
    }

    #[test]
    fn test_auth_keys_are_not_interchangeable() {
        let mut document = valid_document();
        let bugzilla = document["bugzilla"].as_object_mut().unwrap();
        let api_key = bugzilla.remove("api_key").unwrap();
        bugzilla.insert("token_auth".to_string(), api_key);
        let report = ConfigValidator::validate(&document);
        assert_eq!(error_fields(&report), vec!["bugzilla.api_key", "bugzilla.token_auth"]);
    }

    #[test]
    fn test_extra_keys_rejected() {
        let mut document = valid_document();
        document["unexpected"] = json!("value");
        document["jira"]["project"] = json!("FOO");
        let report = ConfigValidator::validate(&document);
        assert!(error_fields(&report).contains(&"unexpected"));
        assert!(error_fields(&report).contains(&"jira.project"));
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_non_string_values() {
        let mut document = valid_document();
        document["bugzilla"]["api_key"] = json!(12345);
        document["jira"] = json!(["not", "an", "object"]);
        let report = ConfigValidator::validate(&document);
        assert_eq!(error_fields(&report), vec!["bugzilla.api_key", "jira"]);
        assert!(report.errors[0].message.contains("number"));
    }

    #[test]
    fn test_field_data_path() {
        let mut document = valid_document();
        document["field_data_path"] = json!("/tmp/fields.json");
        assert!(ConfigValidator::validate(&document).is_valid());

        document["field_data_path"] = Value::Null;
        assert!(ConfigValidator::validate(&document).is_valid());

        document["field_data_path"] = json!(42);
        let report = ConfigValidator::validate(&document);
        assert_eq!(error_fields(&report), vec!["field_data_path"]);
    }

    #[test]
    fn test_non_object_document() {
        let report = ConfigValidator::validate(&json!([1, 2, 3]));
        assert!(report.has_errors());
        assert!(report.errors[0].message.contains("array"));
    }

    #[test]
    fn test_url_scheme_warnings() {
        let mut document = valid_document();
        document["bugzilla"]["URL"] = json!("bz.example.com");
        document["jira"]["URL"] = json!("http://jira.example.com");
        let report = ConfigValidator::validate(&document);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.summary(), "Validation: 0 errors, 2 warnings");
    }

    #[test]
    fn test_into_result() {
        let mut document = valid_document();
        document["bugzilla"]["URL"] = json!(" ");
        let err = ConfigValidator::check(&document).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["bugzilla.URL"]);
        assert!(err.to_string().contains("bugzilla.URL"));
    }
}
