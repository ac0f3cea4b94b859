//! Configuration loader implementation

use crate::schema::ConfigMap;
use crate::validation::ConfigValidator;
use serde_json::{json, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use types::ConfigError;

/// Where a configuration document comes from
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// A JSON file on disk
    FilePath(PathBuf),
    /// An already parsed mapping
    InMemory(ConfigMap),
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::FilePath(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::FilePath(path.to_path_buf())
    }
}

impl From<ConfigMap> for ConfigSource {
    fn from(map: ConfigMap) -> Self {
        ConfigSource::InMemory(map)
    }
}

/// Configuration loader that handles JSON files and in-memory mappings
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a source
    pub fn load(source: impl Into<ConfigSource>) -> Result<ConfigMap, ConfigError> {
        match source.into() {
            ConfigSource::InMemory(map) => {
                debug!("Validating in-memory configuration");
                Self::validate(map)
            }
            ConfigSource::FilePath(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                let document = Self::read_json(&path)?;
                Self::validate_document(document)
            }
        }
    }

    /// Load configuration from an optional path and an optional mapping.
    ///
    /// The mapping wins when both are given and the path is never opened.
    pub fn from_config(
        config_path: Option<&Path>,
        config_dict: Option<ConfigMap>,
    ) -> Result<ConfigMap, ConfigError> {
        match (config_dict, config_path) {
            (Some(map), ignored) => {
                if let Some(path) = ignored {
                    debug!(path = %path.display(), "Both config path and mapping supplied, using the mapping");
                }
                Self::load(ConfigSource::InMemory(map))
            }
            (None, Some(path)) => Self::load(ConfigSource::FilePath(path.to_path_buf())),
            (None, None) => Err(ConfigError::MissingArguments),
        }
    }

    /// Load configuration from a JSON string (for testing)
    pub fn load_from_str(json_content: &str) -> Result<ConfigMap, ConfigError> {
        let document: Value =
            serde_json::from_str(json_content).map_err(|source| ConfigError::ParseFile {
                path: PathBuf::from("<string>"),
                source,
            })?;
        Self::validate_document(document)
    }

    fn read_json(path: &Path) -> Result<Value, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        // Invalid UTF-8 surfaces as a parse error from serde_json
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                ConfigError::ReadFile {
                    path: path.to_path_buf(),
                    source: source.into(),
                }
            } else {
                ConfigError::ParseFile {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }

    fn validate_document(document: Value) -> Result<ConfigMap, ConfigError> {
        let report = ConfigValidator::check(&document)?;
        Self::log_warnings(&report);

        match document {
            Value::Object(map) => Ok(map),
            // check() rejects anything that is not an object
            _ => Err(ConfigError::Validation {
                issues: vec![types::ValidationIssue {
                    field: String::new(),
                    message: "config must be a JSON object".to_string(),
                }],
            }),
        }
    }

    fn validate(map: ConfigMap) -> Result<ConfigMap, ConfigError> {
        let report = ConfigValidator::check_map(&map)?;
        Self::log_warnings(&report);
        Ok(map)
    }

    fn log_warnings(report: &crate::validation::ValidationReport) {
        for issue in &report.warnings {
            warn!(field = %issue.field, "{}", issue.message);
        }
        debug!("{}", report.summary());
    }

    /// Get an example configuration
    pub fn example() -> ConfigMap {
        let example = json!({
            "bugzilla": {
                "URL": "https://bugzilla.example.com",
                "api_key": "your-bugzilla-api-key",
                "field_data_plugin_name": "default"
            },
            "jira": {
                "URL": "https://jira.example.com",
                "token_auth": "your-jira-token",
                "field_data_plugin_name": "default"
            },
            "field_data_path": "field_data.json"
        });

        match example {
            Value::Object(map) => map,
            _ => ConfigMap::new(),
        }
    }

    /// Create example configuration file
    pub fn create_example<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
        use anyhow::Context;

        let json_content = serde_json::to_string_pretty(&Self::example())
            .context("Failed to serialize example configuration")?;

        std::fs::write(path.as_ref(), json_content)
            .context("Failed to write example configuration file")?;

        Ok(())
    }
}
