//! Field data plugins
//!
//! A field data plugin supplies raw custom field records for one backend.
//! Plugins are looked up by the `field_data_plugin_name` configured for each
//! backend; the built-in `default` plugin reads the file named by
//! `field_data_path`. The field generator turns the raw records into typed
//! [`types::Field`] values.

pub mod fields;
pub mod generator;
pub mod registry;
pub mod traits;

pub use fields::*;
pub use generator::*;
pub use registry::*;
pub use traits::*;
