//! Content digests produced by the filesystem walker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit fingerprint of one file's content.
///
/// Two files with the same `ContentDigest` are assumed to have identical content.
/// Digests are compared byte for byte and carry no ordering. The walker usually
/// hands over raw digest bytes with [`from_raw`](Self::from_raw); [`from_bytes`](Self::from_bytes)
/// hashes content directly with XXH3-128.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest([u8; ContentDigest::LEN]);

impl ContentDigest {
    /// Length of a digest in bytes.
    pub const LEN: usize = 16;

    /// Computes a digest from file content using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Wraps digest bytes computed elsewhere.
    pub fn from_raw(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}
