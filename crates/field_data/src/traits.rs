//! Field data plugin traits and interfaces

use serde_json::Value;
use types::Backend;

/// Trait implemented by field data plugins
pub trait FieldDataGenerator: Send + Sync {
    /// Raw field records, one JSON object per field
    fn get_field_data(&self) -> Vec<Value>;

    /// Backend this generator supplies data for
    fn backend(&self) -> Backend;

    /// Get the name of the plugin
    fn name(&self) -> &str;
}
