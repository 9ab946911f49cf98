//! Property resolution: merging defaults with per-property overrides.

use crate::error::ConfigError;
use crate::types::{PropertyConfig, SiftConfig};
use sift_snapshot::CompareStrategy;

/// The effective settings for one task file property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// The property name.
    pub name: String,
    /// Compare strategy used for diffs and cache keys.
    pub compare: CompareStrategy,
    /// Reporting label passed to change detection.
    pub file_type: String,
}

/// Resolves a declared property, overlaying its settings on the defaults.
///
/// Fails with [`ConfigError::UnknownProperty`] if `name` is not declared.
pub fn resolve_property(config: &SiftConfig, name: &str) -> Result<ResolvedProperty, ConfigError> {
    let property = config
        .properties
        .get(name)
        .ok_or_else(|| ConfigError::UnknownProperty(name.to_string()))?;
    Ok(overlay(config, name, property))
}

/// Resolves a property, falling back to the defaults if it is not declared.
pub fn resolve_property_or_default(config: &SiftConfig, name: &str) -> ResolvedProperty {
    match config.properties.get(name) {
        Some(property) => overlay(config, name, property),
        None => overlay(config, name, &PropertyConfig::default()),
    }
}

fn overlay(config: &SiftConfig, name: &str, property: &PropertyConfig) -> ResolvedProperty {
    ResolvedProperty {
        name: name.to_string(),
        compare: property
            .compare
            .unwrap_or(config.snapshot.default_compare),
        file_type: property
            .file_type
            .clone()
            .unwrap_or_else(|| config.snapshot.default_file_type.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    fn config() -> SiftConfig {
        load_config_from_str(
            r#"
[snapshot]
default_file_type = "Input"

[properties.classpath]
compare = "ordered"
file_type = "Classpath"

[properties.sources]
"#,
        )
        .unwrap()
    }

    #[test]
    fn declared_property_overrides_defaults() {
        let resolved = resolve_property(&config(), "classpath").unwrap();
        assert_eq!(
            resolved,
            ResolvedProperty {
                name: "classpath".to_string(),
                compare: CompareStrategy::Ordered,
                file_type: "Classpath".to_string(),
            }
        );
    }

    #[test]
    fn declared_property_inherits_defaults() {
        let resolved = resolve_property(&config(), "sources").unwrap();
        assert_eq!(resolved.compare, CompareStrategy::Unordered);
        assert_eq!(resolved.file_type, "Input");
    }

    #[test]
    fn unknown_property_errors() {
        let err = resolve_property(&config(), "outputs").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProperty(ref n) if n == "outputs"));
    }

    #[test]
    fn undeclared_property_uses_defaults() {
        let resolved = resolve_property_or_default(&config(), "outputs");
        assert_eq!(resolved.name, "outputs");
        assert_eq!(resolved.compare, CompareStrategy::Unordered);
        assert_eq!(resolved.file_type, "Input");
    }
}
