//! Configuration module for the options normalizer
//!
//! Provides types and loading for `navopts.toml`.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError};
pub use schema::*;
