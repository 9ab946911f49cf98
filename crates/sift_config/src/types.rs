//! Configuration types deserialized from `sift.toml`.

use serde::Deserialize;
use sift_snapshot::CompareStrategy;
use std::collections::BTreeMap;

/// The top-level configuration parsed from `sift.toml`.
///
/// Holds the defaults applied to every task file property, plus per-property
/// overrides keyed by property name.
#[derive(Debug, Default, Deserialize)]
pub struct SiftConfig {
    /// Defaults for properties without an explicit override.
    #[serde(default)]
    pub snapshot: SnapshotDefaults,
    /// Per-property overrides (e.g., "classpath", "sources").
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyConfig>,
}

/// Defaults applied to every file property.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotDefaults {
    /// Compare strategy used when a property does not declare one.
    #[serde(default)]
    pub default_compare: CompareStrategy,
    /// Reporting label used when a property does not declare one.
    #[serde(default = "default_file_type")]
    pub default_file_type: String,
}

impl Default for SnapshotDefaults {
    fn default() -> Self {
        Self {
            default_compare: CompareStrategy::default(),
            default_file_type: default_file_type(),
        }
    }
}

fn default_file_type() -> String {
    "Input".to_string()
}

/// Overrides for a single named file property.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyConfig {
    /// Compare strategy for this property.
    #[serde(default)]
    pub compare: Option<CompareStrategy>,
    /// Reporting label for changes in this property.
    #[serde(default)]
    pub file_type: Option<String>,
}
