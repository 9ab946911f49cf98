//! Errors raised while reading `sift.toml` and resolving file properties.

use std::path::PathBuf;

/// Failure to load a `sift.toml` or to resolve a property declared in it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file at `path` could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid TOML or does not match the `sift.toml` schema.
    #[error("malformed sift.toml: {0}")]
    Malformed(#[from] toml::de::Error),

    /// `[snapshot] default_file_type` is blank.
    #[error("[snapshot] default_file_type must not be blank")]
    BlankDefaultFileType,

    /// A `[properties.<name>]` table has a blank name.
    #[error("property tables in sift.toml need a non-blank name")]
    BlankPropertyName,

    /// A declared property sets `file_type` to a blank string.
    #[error("property '{0}' sets a blank file_type")]
    BlankFileType(String),

    /// A property was looked up that `sift.toml` does not declare.
    #[error("property '{0}' is not declared in sift.toml")]
    UnknownProperty(String),
}
