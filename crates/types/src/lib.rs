//! Shared types for the Bugjira toolkit
//!
//! This crate contains the domain types shared by the config loader,
//! the field data plugins and the command line front end.

pub mod backend;
pub mod error;
pub mod field;
pub mod utils;

// Re-export commonly used types
pub use backend::Backend;
pub use error::{BugjiraError, ConfigError, FieldDataError, Result, ValidationIssue};
pub use field::*;
