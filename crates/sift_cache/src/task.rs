//! Task-level cache keys combining the keys of every file property.

use std::collections::BTreeMap;

use sift_snapshot::CollectionSnapshot;
use tracing::debug;

use crate::key::{CacheKey, CacheKeyBuilder};

/// Collects per-property cache keys and combines them into one task key.
///
/// Properties are combined in name order, so the order in which the caller
/// registers them does not affect the result. Registering a name twice keeps
/// the later key.
#[derive(Debug, Default)]
pub struct TaskKeyBuilder {
    properties: BTreeMap<String, CacheKey>,
}

impl TaskKeyBuilder {
    /// Creates a builder with no properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a precomputed key for a property.
    pub fn put_key(&mut self, property: &str, key: CacheKey) -> &mut Self {
        self.properties.insert(property.to_string(), key);
        self
    }

    /// Folds `snapshot` into a key and registers it under `property`.
    pub fn put_snapshot(&mut self, property: &str, snapshot: &CollectionSnapshot) -> &mut Self {
        let key = CacheKeyBuilder::new().put_snapshot(snapshot).build();
        self.put_key(property, key)
    }

    /// Returns the key registered for `property`.
    pub fn property_key(&self, property: &str) -> Option<CacheKey> {
        self.properties.get(property).copied()
    }

    /// Combines all registered property keys.
    pub fn build(&self) -> CacheKey {
        let mut builder = CacheKeyBuilder::new();
        for (name, key) in &self.properties {
            builder.put_str(name).put_bytes(key.as_bytes());
        }
        let key = builder.build();
        debug!(properties = self.properties.len(), %key, "built task cache key");
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_common::ContentDigest;
    use sift_snapshot::{CompareStrategy, EntryMap, EntrySnapshot};

    fn snapshot(content: &[u8]) -> CollectionSnapshot {
        let map: EntryMap = [("/src/a.rs", EntrySnapshot::File(ContentDigest::from_bytes(content)))]
            .into_iter()
            .collect();
        CollectionSnapshot::from_entries(map, CompareStrategy::Unordered)
    }

    #[test]
    fn registration_order_irrelevant() {
        let sources = snapshot(b"sources");
        let resources = snapshot(b"resources");

        let a = TaskKeyBuilder::new()
            .put_snapshot("sources", &sources)
            .put_snapshot("resources", &resources)
            .build();
        let b = TaskKeyBuilder::new()
            .put_snapshot("resources", &resources)
            .put_snapshot("sources", &sources)
            .build();
        assert_eq!(a, b);
    }

    #[test]
    fn property_name_is_part_of_key() {
        let s = snapshot(b"x");
        let a = TaskKeyBuilder::new().put_snapshot("sources", &s).build();
        let b = TaskKeyBuilder::new().put_snapshot("resources", &s).build();
        assert_ne!(a, b);
    }

    #[test]
    fn later_registration_replaces() {
        let old = snapshot(b"old");
        let new = snapshot(b"new");
        let mut builder = TaskKeyBuilder::new();
        builder.put_snapshot("sources", &old).put_snapshot("sources", &new);

        let expected = CacheKeyBuilder::new().put_snapshot(&new).build();
        assert_eq!(builder.property_key("sources"), Some(expected));
        assert_eq!(
            builder.build(),
            TaskKeyBuilder::new().put_snapshot("sources", &new).build()
        );
    }

    #[test]
    fn content_change_changes_task_key() {
        let a = TaskKeyBuilder::new()
            .put_snapshot("sources", &snapshot(b"v1"))
            .build();
        let b = TaskKeyBuilder::new()
            .put_snapshot("sources", &snapshot(b"v2"))
            .build();
        assert_ne!(a, b);
    }
}
