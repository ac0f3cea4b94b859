//! Typed field generation on top of field data plugins

use crate::registry::FieldDataGeneratorFactory;
use crate::traits::FieldDataGenerator;
use config::ConfigMap;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use types::{Backend, BugzillaField, Field, FieldDataError, JiraField};

/// Turns a plugin's raw records into typed fields for one backend
pub struct FieldGenerator {
    backend: Backend,
    field_data_generator: Arc<dyn FieldDataGenerator>,
}

impl FieldGenerator {
    pub fn new(backend: Backend, field_data_generator: Arc<dyn FieldDataGenerator>) -> Self {
        Self {
            backend,
            field_data_generator,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Name of the plugin feeding this generator
    pub fn plugin_name(&self) -> &str {
        self.field_data_generator.name()
    }

    /// Build typed fields from the plugin's current field data
    pub fn get_fields(&self) -> Result<Vec<Field>, FieldDataError> {
        self.field_data_generator
            .get_field_data()
            .into_iter()
            .map(|record| self.to_field(record))
            .collect()
    }

    fn to_field(&self, record: Value) -> Result<Field, FieldDataError> {
        let field = match self.backend {
            Backend::Bugzilla => serde_json::from_value::<BugzillaField>(record).map(Field::Bugzilla),
            Backend::Jira => serde_json::from_value::<JiraField>(record).map(Field::Jira),
        };

        field.map_err(|e| FieldDataError::InvalidData(format!("{} field: {}", self.backend, e)))
    }
}

/// Hands out one field generator per backend, created on first use
pub struct FieldGeneratorFactory {
    data_generators: FieldDataGeneratorFactory,
    generators: HashMap<Backend, Arc<FieldGenerator>>,
}

impl FieldGeneratorFactory {
    pub fn new(data_generators: FieldDataGeneratorFactory) -> Self {
        Self {
            data_generators,
            generators: HashMap::new(),
        }
    }

    pub fn get_field_generator(
        &mut self,
        backend: Backend,
        config: &ConfigMap,
    ) -> Result<Arc<FieldGenerator>, FieldDataError> {
        if let Some(generator) = self.generators.get(&backend) {
            return Ok(Arc::clone(generator));
        }

        let data_generator = self.data_generators.get_field_data_generator(backend, config)?;
        let generator = Arc::new(FieldGenerator::new(backend, data_generator));
        self.generators.insert(backend, Arc::clone(&generator));
        Ok(generator)
    }
}

impl Default for FieldGeneratorFactory {
    fn default() -> Self {
        Self::new(FieldDataGeneratorFactory::default())
    }
}
