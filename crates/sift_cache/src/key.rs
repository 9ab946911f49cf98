//! Hashed cache keys built from folded snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sift_snapshot::fold::append_length_prefixed;
use sift_snapshot::{CacheKeySink, CollectionSnapshot};
use xxhash_rust::xxh3::Xxh3;

use crate::error::CacheError;

/// A 128-bit cache key.
///
/// Equal keys mean the folded inputs were byte-for-byte identical, so cached
/// work produced for one may be reused for the other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey([u8; 16]);

impl CacheKey {
    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CacheKey({self})")
    }
}

impl FromStr for CacheKey {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CacheError::InvalidKey {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        if s.len() != 32 || !s.is_ascii() {
            return Err(invalid("expected 32 hex digits"));
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| invalid("non-hex digit"))?;
        }
        Ok(Self(bytes))
    }
}

/// Streaming XXH3-128 accumulator for cache keys.
///
/// Accepts snapshot folds through [`CacheKeySink`] as well as arbitrary
/// strings and bytes, then produces a [`CacheKey`].
pub struct CacheKeyBuilder {
    hasher: Xxh3,
}

impl CacheKeyBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            hasher: Xxh3::new(),
        }
    }

    /// Appends raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.hasher.update(bytes);
        self
    }

    /// Appends a length-prefixed string.
    pub fn put_str(&mut self, s: &str) -> &mut Self {
        append_length_prefixed(self, s.as_bytes());
        self
    }

    /// Appends a snapshot, folded according to its compare strategy.
    pub fn put_snapshot(&mut self, snapshot: &CollectionSnapshot) -> &mut Self {
        snapshot.fold_into_cache_key(self);
        self
    }

    /// Produces the key for everything appended so far.
    pub fn build(&self) -> CacheKey {
        CacheKey(self.hasher.digest128().to_le_bytes())
    }
}

impl Default for CacheKeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheKeySink for CacheKeyBuilder {
    fn append_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }
}
