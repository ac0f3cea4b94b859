//! Command implementations

use anyhow::{Context, Result};
use config::{BugjiraConfig, ConfigLoader};
use field_data::FieldGeneratorFactory;
use std::fmt::Write;
use std::path::Path;
use tracing::info;
use types::utils::sanitize_for_logging;
use types::Backend;

/// Validate a config file and describe it with secrets masked
pub fn check(config_path: &Path) -> Result<String> {
    let map = ConfigLoader::load(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    let config = BugjiraConfig::from_map(&map)?;
    info!("Configuration loaded from: {}", config_path.display());

    let mut out = String::new();
    writeln!(out, "Configuration OK: {}", config_path.display())?;
    for backend in Backend::ALL {
        writeln!(out, "{}:", backend)?;
        writeln!(out, "  URL: {}", config.url(backend))?;
        writeln!(
            out,
            "  {}: {}",
            backend.auth_key(),
            sanitize_for_logging(config.auth_token(backend))
        )?;
        writeln!(out, "  field_data_plugin_name: {}", config.plugin_name(backend))?;
    }
    if let Some(path) = &config.field_data_path {
        writeln!(out, "field_data_path: {}", path)?;
    }

    Ok(out)
}

/// List the fields the configured plugin supplies for `backend`
pub fn fields(config_path: &Path, backend: Backend) -> Result<String> {
    let config = ConfigLoader::load(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let mut factory = FieldGeneratorFactory::default();
    let generator = factory
        .get_field_generator(backend, &config)
        .with_context(|| format!("Failed to initialize field data plugin for {}", backend))?;
    let fields = generator.get_fields()?;
    info!(%backend, plugin = generator.plugin_name(), count = fields.len(), "Generated fields");

    let mut out = String::new();
    for field in &fields {
        writeln!(out, "{}\t{}", field.backend_id(), field.name())?;
    }
    Ok(out)
}

/// Name the backend that owns an issue key
pub fn route(key: &str) -> Result<String> {
    let backend = Backend::for_key(key)?;
    Ok(format!("{}\n", backend))
}

/// Write an example config file
pub fn init(path: &Path) -> Result<String> {
    if path.exists() {
        anyhow::bail!("Refusing to overwrite existing file {}", path.display());
    }
    ConfigLoader::create_example(path)?;
    Ok(format!("Wrote example configuration to {}\n", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write as _;
    use tempfile::{NamedTempFile, TempDir};

    fn write_json(value: &serde_json::Value) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn config_json(field_data_path: Option<&Path>) -> serde_json::Value {
        let mut config = json!({
            "bugzilla": {"URL": "https://bz.example.com", "api_key": "bz-secret-api-key", "field_data_plugin_name": "default"},
            "jira": {"URL": "https://jira.example.com", "token_auth": "jira-secret-token", "field_data_plugin_name": "default"}
        });
        if let Some(path) = field_data_path {
            config["field_data_path"] = json!(path.to_str().unwrap());
        }
        config
    }

    #[test]
    fn test_check_masks_secrets() {
        let file = write_json(&config_json(None));
        let out = check(file.path()).unwrap();
        assert!(out.starts_with("Configuration OK"));
        assert!(out.contains("URL: https://jira.example.com"));
        assert!(!out.contains("bz-secret-api-key"));
        assert!(!out.contains("jira-secret-token"));
    }

    #[test]
    fn test_check_reports_invalid_field() {
        let mut config = config_json(None);
        config["bugzilla"]["URL"] = json!("");
        let file = write_json(&config);
        let err = check(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("bugzilla.URL"));
    }

    #[test]
    fn test_fields_lists_plugin_data() {
        let field_data = write_json(&json!({
            "bugzilla_field_data": [{"name": "Status", "bugzilla_field_name": "status"}],
            "jira_field_data": [{"name": "Epic Link", "jira_field_id": "customfield_12311140"}]
        }));
        let file = write_json(&config_json(Some(field_data.path())));

        let out = fields(file.path(), Backend::Jira).unwrap();
        assert_eq!(out, "customfield_12311140\tEpic Link\n");
    }

    #[test]
    fn test_fields_without_field_data_path() {
        let file = write_json(&config_json(None));
        assert_eq!(fields(file.path(), Backend::Bugzilla).unwrap(), "");
    }

    #[test]
    fn test_route() {
        assert_eq!(route("123456").unwrap(), "bugzilla\n");
        assert_eq!(route("FOO-123").unwrap(), "jira\n");
        assert!(route("BADKEY123").is_err());
    }

    #[test]
    fn test_init_writes_loadable_example() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bugjira.json");
        init(&path).unwrap();
        assert!(check(&path).is_ok());
        assert!(init(&path).is_err());
    }
}
