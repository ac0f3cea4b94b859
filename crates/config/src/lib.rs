//! Configuration management for the Bugjira toolkit
//!
//! This crate loads the bugzilla and jira connection settings from a JSON
//! file or an in-memory mapping and validates them against a closed schema.
//! The validated mapping is handed back untouched.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigLoader, ConfigSource};
pub use schema::*;
pub use validation::*;
