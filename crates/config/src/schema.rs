//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use types::{Backend, ConfigError, ValidationIssue};

/// A validated configuration document, exactly as supplied by the caller
pub type ConfigMap = Map<String, Value>;

/// Optional top-level key pointing at the default plugin's field data file
pub const FIELD_DATA_PATH_KEY: &str = "field_data_path";

/// Backend URL key
pub const URL_KEY: &str = "URL";

/// Backend field data plugin name key
pub const PLUGIN_NAME_KEY: &str = "field_data_plugin_name";

/// Every key permitted at the top level
pub const TOP_LEVEL_KEYS: [&str; 3] = ["bugzilla", "jira", FIELD_DATA_PATH_KEY];

/// Required keys of one backend's settings block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendSchema {
    pub backend: Backend,
    pub required: [&'static str; 3],
}

pub const BUGZILLA_SCHEMA: BackendSchema = BackendSchema {
    backend: Backend::Bugzilla,
    required: [URL_KEY, "api_key", PLUGIN_NAME_KEY],
};

pub const JIRA_SCHEMA: BackendSchema = BackendSchema {
    backend: Backend::Jira,
    required: [URL_KEY, "token_auth", PLUGIN_NAME_KEY],
};

impl BackendSchema {
    pub fn for_backend(backend: Backend) -> Self {
        match backend {
            Backend::Bugzilla => BUGZILLA_SCHEMA,
            Backend::Jira => JIRA_SCHEMA,
        }
    }

    /// Whether `key` may appear inside this backend's block
    pub fn allows(&self, key: &str) -> bool {
        self.required.iter().any(|required| *required == key)
    }
}

/// Typed, read-only view of a validated config
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BugjiraConfig {
    pub bugzilla: BugzillaConfig,
    pub jira: JiraConfig,
    /// Only used by the default field data plugin
    #[serde(default)]
    pub field_data_path: Option<String>,
}

/// Bugzilla connection settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BugzillaConfig {
    #[serde(rename = "URL")]
    pub url: String,
    pub api_key: String,
    pub field_data_plugin_name: String,
}

/// Jira connection settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JiraConfig {
    #[serde(rename = "URL")]
    pub url: String,
    pub token_auth: String,
    pub field_data_plugin_name: String,
}

impl std::fmt::Debug for BugzillaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BugzillaConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("field_data_plugin_name", &self.field_data_plugin_name)
            .finish()
    }
}

impl std::fmt::Debug for JiraConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraConfig")
            .field("url", &self.url)
            .field("token_auth", &"[REDACTED]")
            .field("field_data_plugin_name", &self.field_data_plugin_name)
            .finish()
    }
}

impl BugjiraConfig {
    /// Build the typed view from a mapping, validating it first
    pub fn from_map(map: &ConfigMap) -> Result<Self, ConfigError> {
        crate::validation::ConfigValidator::check_map(map)?;

        serde_json::from_value(Value::Object(map.clone())).map_err(|e| ConfigError::Validation {
            issues: vec![ValidationIssue {
                field: String::new(),
                message: e.to_string(),
            }],
        })
    }

    pub fn url(&self, backend: Backend) -> &str {
        match backend {
            Backend::Bugzilla => &self.bugzilla.url,
            Backend::Jira => &self.jira.url,
        }
    }

    /// The backend's auth token (`api_key` or `token_auth`)
    pub fn auth_token(&self, backend: Backend) -> &str {
        match backend {
            Backend::Bugzilla => &self.bugzilla.api_key,
            Backend::Jira => &self.jira.token_auth,
        }
    }

    pub fn plugin_name(&self, backend: Backend) -> &str {
        match backend {
            Backend::Bugzilla => &self.bugzilla.field_data_plugin_name,
            Backend::Jira => &self.jira.field_data_plugin_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_map() -> ConfigMap {
        match json!({
            "bugzilla": {"URL": "https://bz.example.com", "api_key": "abc123", "field_data_plugin_name": "default"},
            "jira": {"URL": "https://jira.example.com", "token_auth": "xyz789", "field_data_plugin_name": "custom"},
            "field_data_path": "/tmp/fields.json"
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_typed_view() {
        let config = BugjiraConfig::from_map(&sample_map()).unwrap();
        assert_eq!(config.url(Backend::Bugzilla), "https://bz.example.com");
        assert_eq!(config.auth_token(Backend::Jira), "xyz789");
        assert_eq!(config.plugin_name(Backend::Jira), "custom");
        assert_eq!(config.field_data_path.as_deref(), Some("/tmp/fields.json"));
    }

    #[test]
    fn test_typed_view_rejects_invalid_map() {
        let mut map = sample_map();
        map.remove("jira");
        let err = BugjiraConfig::from_map(&map).unwrap_err();
        assert_eq!(err.invalid_fields(), vec!["jira"]);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = BugjiraConfig::from_map(&sample_map()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("abc123"));
        assert!(!rendered.contains("xyz789"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_backend_schema() {
        assert!(BUGZILLA_SCHEMA.allows("api_key"));
        assert!(!BUGZILLA_SCHEMA.allows("token_auth"));
        assert_eq!(BackendSchema::for_backend(Backend::Jira), JIRA_SCHEMA);
    }
}
