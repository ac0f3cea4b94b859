//! Plugin registry and field data generator factory

use crate::generator::{FileFieldDataGenerator, DEFAULT_PLUGIN_NAME};
use crate::traits::FieldDataGenerator;
use config::{ConfigMap, PLUGIN_NAME_KEY};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use types::{Backend, FieldDataError};

/// Builds a plugin instance for a backend from a config
pub type GeneratorConstructor = Box<
    dyn Fn(Backend, Option<&ConfigMap>) -> Result<Arc<dyn FieldDataGenerator>, FieldDataError>
        + Send
        + Sync,
>;

/// Field data plugins known by name
pub struct PluginRegistry {
    plugins: HashMap<String, GeneratorConstructor>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in plugins
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_PLUGIN_NAME, |backend, config| {
            let generator = FileFieldDataGenerator::new(backend, config)?;
            Ok(Arc::new(generator) as Arc<dyn FieldDataGenerator>)
        });
        registry
    }

    /// Register a plugin, replacing any plugin of the same name
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(Backend, Option<&ConfigMap>) -> Result<Arc<dyn FieldDataGenerator>, FieldDataError>
            + Send
            + Sync
            + 'static,
    {
        self.plugins.insert(name.to_string(), Box::new(constructor));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Get all plugin names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Instantiate the plugin registered under `name`
    pub fn instantiate(
        &self,
        name: &str,
        backend: Backend,
        config: Option<&ConfigMap>,
    ) -> Result<Arc<dyn FieldDataGenerator>, FieldDataError> {
        let constructor = self.plugins.get(name).ok_or_else(|| FieldDataError::UnknownPlugin {
            name: name.to_string(),
        })?;

        debug!(plugin = name, %backend, "Instantiating field data plugin");
        constructor(backend, config)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Hands out one field data generator per backend, created on first use
pub struct FieldDataGeneratorFactory {
    registry: PluginRegistry,
    generators: HashMap<Backend, Arc<dyn FieldDataGenerator>>,
}

impl FieldDataGeneratorFactory {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry,
            generators: HashMap::new(),
        }
    }

    /// Get the generator for `backend`, instantiating the configured plugin
    /// the first time
    pub fn get_field_data_generator(
        &mut self,
        backend: Backend,
        config: &ConfigMap,
    ) -> Result<Arc<dyn FieldDataGenerator>, FieldDataError> {
        if let Some(generator) = self.generators.get(&backend) {
            return Ok(Arc::clone(generator));
        }

        let plugin_name = Self::plugin_name_from_config(backend, config)?;
        let generator = self.registry.instantiate(plugin_name, backend, Some(config))?;
        self.generators.insert(backend, Arc::clone(&generator));
        Ok(generator)
    }

    /// Install a generator for a backend, bypassing the registry
    pub fn insert(&mut self, backend: Backend, generator: Arc<dyn FieldDataGenerator>) {
        self.generators.insert(backend, generator);
    }

    /// Plugin name configured for `backend`
    pub fn plugin_name_from_config(
        backend: Backend,
        config: &ConfigMap,
    ) -> Result<&str, FieldDataError> {
        config
            .get(backend.config_key())
            .and_then(|section| section.get(PLUGIN_NAME_KEY))
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| FieldDataError::MissingPluginName {
                backend: backend.to_string(),
            })
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }
}

impl Default for FieldDataGeneratorFactory {
    fn default() -> Self {
        Self::new(PluginRegistry::with_defaults())
    }
}
