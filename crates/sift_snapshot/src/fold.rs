//! Folding snapshot contents into a cache-key accumulator.

use crate::entry::EntrySnapshot;

/// A sink that accumulates the bytes of a cache key.
///
/// Implemented by `Vec<u8>` for inspecting the raw folded stream, and by the
/// hashing key builders of the cache layer.
pub trait CacheKeySink {
    /// Appends `bytes` to the key.
    fn append_bytes(&mut self, bytes: &[u8]);
}

impl CacheKeySink for Vec<u8> {
    fn append_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl<S: CacheKeySink + ?Sized> CacheKeySink for &mut S {
    fn append_bytes(&mut self, bytes: &[u8]) {
        (**self).append_bytes(bytes);
    }
}

/// Appends `bytes` preceded by its length, so adjacent fields cannot run together.
pub fn append_length_prefixed<S: CacheKeySink + ?Sized>(sink: &mut S, bytes: &[u8]) {
    sink.append_bytes(&(bytes.len() as u64).to_le_bytes());
    sink.append_bytes(bytes);
}

/// Folds one `(path, snapshot)` entry.
pub(crate) fn append_entry<S: CacheKeySink + ?Sized>(
    sink: &mut S,
    path: &str,
    snapshot: &EntrySnapshot,
) {
    append_length_prefixed(sink, path.as_bytes());
    snapshot.append_to_cache_key(sink);
}
