//! Error types for cache key handling.

/// Errors that can occur while handling cache keys.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// A textual cache key could not be parsed.
    #[error("invalid cache key '{input}': {reason}")]
    InvalidKey {
        /// The text that failed to parse.
        input: String,
        /// Description of the problem.
        reason: String,
    },
}
