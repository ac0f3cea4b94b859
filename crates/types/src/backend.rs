//! Issue tracking backends

use crate::error::{BugjiraError, Result};
use crate::utils::{is_bugzilla_key, is_jira_key};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two issue tracking systems whose settings live in the config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Bugzilla,
    Jira,
}

impl Backend {
    /// All supported backends, in config order
    pub const ALL: [Backend; 2] = [Backend::Bugzilla, Backend::Jira];

    /// Top-level config key holding this backend's settings
    pub fn config_key(&self) -> &'static str {
        match self {
            Backend::Bugzilla => "bugzilla",
            Backend::Jira => "jira",
        }
    }

    /// Name of the authentication token field inside the backend settings
    pub fn auth_key(&self) -> &'static str {
        match self {
            Backend::Bugzilla => "api_key",
            Backend::Jira => "token_auth",
        }
    }

    /// Key in the field data file holding this backend's records
    pub fn field_data_key(&self) -> &'static str {
        match self {
            Backend::Bugzilla => "bugzilla_field_data",
            Backend::Jira => "jira_field_data",
        }
    }

    /// Pick the backend that owns an issue key
    pub fn for_key(key: &str) -> Result<Self> {
        if is_bugzilla_key(key) {
            return Ok(Backend::Bugzilla);
        }

        if is_jira_key(key) {
            return Ok(Backend::Jira);
        }

        Err(BugjiraError::InvalidKey {
            key: key.to_string(),
        })
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

impl FromStr for Backend {
    type Err = BugjiraError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bugzilla" => Ok(Backend::Bugzilla),
            "jira" => Ok(Backend::Jira),
            other => Err(BugjiraError::UnknownBackend(other.to_string())),
        }
    }
}
