//! Parsing and validation of `sift.toml` snapshot configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`SiftConfig`] that decides, per task file property, which compare strategy
//! and reporting label change detection uses.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE};
pub use resolve::{resolve_property, resolve_property_or_default, ResolvedProperty};
pub use types::*;
