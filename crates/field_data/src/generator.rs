//! File backed field data plugin

use crate::traits::FieldDataGenerator;
use config::{ConfigMap, FIELD_DATA_PATH_KEY};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};
use types::{Backend, FieldDataError, FieldDataSet};

/// Name of the built-in plugin
pub const DEFAULT_PLUGIN_NAME: &str = "default";

/// Default plugin: serves records from the JSON file named by `field_data_path`
#[derive(Debug, Clone)]
pub struct FileFieldDataGenerator {
    backend: Backend,
    field_data: Map<String, Value>,
}

impl FileFieldDataGenerator {
    /// Create a generator for `backend`.
    ///
    /// Without a config, or when `field_data_path` is absent or empty, the
    /// generator holds no data.
    pub fn new(backend: Backend, config: Option<&ConfigMap>) -> Result<Self, FieldDataError> {
        let path = config
            .and_then(|config| config.get(FIELD_DATA_PATH_KEY))
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty());

        let Some(path) = path else {
            debug!(%backend, "No field_data_path configured, field data is empty");
            return Ok(Self {
                backend,
                field_data: Map::new(),
            });
        };

        let field_data = load_field_data(Path::new(path))?;
        info!(%backend, path, "Loaded field data");

        Ok(Self {
            backend,
            field_data,
        })
    }

    /// Create a generator from an already parsed field data document
    pub fn from_value(backend: Backend, data: Value) -> Result<Self, FieldDataError> {
        validate_field_data(&data)?;
        match data {
            Value::Object(field_data) => Ok(Self {
                backend,
                field_data,
            }),
            _ => Err(FieldDataError::InvalidData(
                "field data must be a JSON object".to_string(),
            )),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.field_data.is_empty()
    }
}

impl FieldDataGenerator for FileFieldDataGenerator {
    fn get_field_data(&self) -> Vec<Value> {
        self.field_data
            .get(self.backend.field_data_key())
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    fn backend(&self) -> Backend {
        self.backend
    }

    fn name(&self) -> &str {
        DEFAULT_PLUGIN_NAME
    }
}

/// Read, parse and validate a field data file
pub fn load_field_data(path: &Path) -> Result<Map<String, Value>, FieldDataError> {
    let file = File::open(path).map_err(|source| FieldDataError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let data: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        FieldDataError::ParseFile {
            path: path.to_path_buf(),
            source,
        }
    })?;

    validate_field_data(&data)?;

    match data {
        Value::Object(map) => Ok(map),
        _ => Err(FieldDataError::InvalidData(
            "field data must be a JSON object".to_string(),
        )),
    }
}

/// Check a field data document against the expected layout
pub fn validate_field_data(data: &Value) -> Result<FieldDataSet, FieldDataError> {
    let set: FieldDataSet = serde_json::from_value(data.clone())
        .map_err(|e| FieldDataError::InvalidData(e.to_string()))?;

    for (index, field) in set.bugzilla_field_data.iter().enumerate() {
        if field.name.trim().is_empty() || field.bugzilla_field_name.trim().is_empty() {
            return Err(FieldDataError::InvalidData(format!(
                "bugzilla_field_data[{}] has an empty value",
                index
            )));
        }
    }

    for (index, field) in set.jira_field_data.iter().enumerate() {
        if field.name.trim().is_empty() || field.jira_field_id.trim().is_empty() {
            return Err(FieldDataError::InvalidData(format!(
                "jira_field_data[{}] has an empty value",
                index
            )));
        }
    }

    Ok(set)
}
