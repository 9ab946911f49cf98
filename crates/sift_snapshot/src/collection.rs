//! The merged snapshot of one task file property.

use std::path::Path;

use sift_common::ContentDigest;
use tracing::{debug, trace};

use crate::diff::Changes;
use crate::entry::EntrySnapshot;
use crate::entry_map::EntryMap;
use crate::fold::CacheKeySink;
use crate::strategy::CompareStrategy;
use crate::tree::TreeSnapshot;

/// A path-indexed view over everything a file property resolved to.
///
/// Built either from a ready-made [`EntryMap`] or by merging the
/// [`TreeSnapshot`]s produced by the walker. All operations are pure reads, so a
/// collection snapshot can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot {
    snapshots: EntryMap,
    trees: Vec<TreeSnapshot>,
    compare: CompareStrategy,
}

impl CollectionSnapshot {
    /// Creates a snapshot from an already merged mapping, without tree provenance.
    pub fn from_entries(snapshots: EntryMap, compare: CompareStrategy) -> Self {
        Self {
            snapshots,
            trees: Vec::new(),
            compare,
        }
    }

    /// Creates a snapshot by merging `trees` in order.
    ///
    /// When several trees contain the same path, the snapshot from the later
    /// tree wins and the path keeps the position where it was first seen.
    pub fn from_trees(trees: Vec<TreeSnapshot>, compare: CompareStrategy) -> Self {
        let capacity = trees.iter().map(|tree| tree.entries().len()).sum();
        let mut snapshots = EntryMap::with_capacity(capacity);
        for tree in &trees {
            for (path, snapshot) in tree.entries() {
                if snapshots.insert(path.as_str(), *snapshot).is_some() {
                    trace!(path = %path, "entry replaced by a later tree snapshot");
                }
            }
        }
        debug!(
            trees = trees.len(),
            entries = snapshots.len(),
            ?compare,
            "merged tree snapshots"
        );
        Self {
            snapshots,
            trees,
            compare,
        }
    }

    /// Creates an empty snapshot.
    pub fn empty(compare: CompareStrategy) -> Self {
        Self::from_entries(EntryMap::new(), compare)
    }

    /// Paths of every entry that is not a directory, in mapping order.
    ///
    /// Declared paths that were missing on disk are still file paths and are
    /// included.
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> + '_ {
        self.snapshots
            .iter()
            .filter(|(_, snapshot)| !snapshot.is_directory())
            .map(|(path, _)| Path::new(path))
    }

    /// Returns the content digest recorded for a regular file at `path`.
    ///
    /// Absent paths, directories, and missing files all yield `None`.
    pub fn snapshot_for(&self, path: impl AsRef<Path>) -> Option<ContentDigest> {
        let path = path.as_ref().to_str()?;
        self.snapshots
            .get(path)
            .and_then(EntrySnapshot::digest)
            .copied()
    }

    /// Returns `true` if the property resolved to no entries at all.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of entries, directories included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// The merged mapping.
    pub fn entries(&self) -> &EntryMap {
        &self.snapshots
    }

    /// The source tree snapshots, empty when built from a raw mapping.
    pub fn trees(&self) -> &[TreeSnapshot] {
        &self.trees
    }

    /// The compare strategy governing diffs and cache keys.
    pub fn compare_strategy(&self) -> CompareStrategy {
        self.compare
    }

    /// Storage ids of the source trees that can be reused, in source order.
    ///
    /// Trees that are not shareable or not registered yet are skipped.
    pub fn shareable_tree_ids(&self) -> Vec<u64> {
        self.trees
            .iter()
            .filter_map(|tree| {
                let id = tree.shareable_id();
                if id.is_none() {
                    trace!(
                        shareable = tree.is_shareable(),
                        assigned = ?tree.assigned_id(),
                        "tree snapshot has no reusable id"
                    );
                }
                id
            })
            .collect()
    }

    /// Returns the changes from `previous` to this snapshot.
    ///
    /// Comparison follows this snapshot's strategy. The iterator is lazy; stop
    /// pulling as soon as the answer is known.
    pub fn diff_since<'a>(&'a self, previous: &'a CollectionSnapshot, file_type: &'a str) -> Changes<'a> {
        self.compare
            .changes_since(&self.snapshots, &previous.snapshots, file_type)
    }

    /// Folds this snapshot into a cache-key sink according to its strategy.
    pub fn fold_into_cache_key<S: CacheKeySink + ?Sized>(&self, sink: &mut S) {
        self.compare.append_to_cache_key(sink, &self.snapshots);
    }
}
