//! Error types for the Bugjira toolkit

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the bugjira toolkit
#[derive(Error, Debug)]
pub enum BugjiraError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Field data plugin errors
    #[error(transparent)]
    FieldData(#[from] FieldDataError),

    /// A key that is neither a bugzilla id nor a jira issue key
    #[error("key does not appear to be a bugzilla or jira ID: {key}")]
    InvalidKey { key: String },

    /// Unknown backend name
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),
}

/// Result type alias for bugjira operations
pub type Result<T> = std::result::Result<T, BugjiraError>;

/// A single schema violation, located by its dotted field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Configuration specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither a path nor a mapping was supplied
    #[error("missing arguments: from_config requires config_path or config_dict")]
    MissingArguments,

    /// File missing or unreadable
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File contents are not valid JSON
    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Schema violations
    #[error("Configuration validation error: {}", join_issues(.issues))]
    Validation { issues: Vec<ValidationIssue> },
}

impl ConfigError {
    /// Field paths of every schema violation, empty for other kinds
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            ConfigError::Validation { issues } => {
                issues.iter().map(|issue| issue.field.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Field data plugin specific errors
#[derive(Error, Debug)]
pub enum FieldDataError {
    /// Field data file missing or unreadable
    #[error("failed to read field data file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Field data file is not valid JSON
    #[error("failed to parse field data file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Field data does not match the expected layout
    #[error("Invalid field data detected: {0}")]
    InvalidData(String),

    /// No plugin registered under the configured name
    #[error("No field data plugin named '{name}' is registered")]
    UnknownPlugin { name: String },

    /// The config lacks the plugin name for a backend
    #[error("Missing field_data_plugin_name for backend {backend}")]
    MissingPluginName { backend: String },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
