//! Summaries of detected changes for the up-to-date check.
//!
//! Change iterators are lazy; the helpers here either consume them fully to
//! categorize every change, or pull a single change to answer "is this
//! property out of date, and why?".

use std::path::PathBuf;

use sift_snapshot::{Change, ChangeKind, CollectionSnapshot};

/// Changes between two snapshots, grouped by kind.
///
/// Each group keeps the order in which the diff reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Paths that appeared (or moved, for ordered properties).
    pub added: Vec<PathBuf>,

    /// Paths whose content changed.
    pub modified: Vec<PathBuf>,

    /// Paths that disappeared (or moved, for ordered properties).
    pub removed: Vec<PathBuf>,
}

impl ChangeSet {
    /// Drains `changes` into a change set.
    pub fn from_changes<'a>(changes: impl IntoIterator<Item = Change<'a>>) -> Self {
        let mut set = ChangeSet::default();
        for change in changes {
            let path = PathBuf::from(change.path);
            match change.kind {
                ChangeKind::Added => set.added.push(path),
                ChangeKind::Modified => set.modified.push(path),
                ChangeKind::Removed => set.removed.push(path),
            }
        }
        set
    }

    /// Computes the full change set from `previous` to `current`.
    pub fn between(current: &CollectionSnapshot, previous: &CollectionSnapshot) -> Self {
        Self::from_changes(current.diff_since(previous, ""))
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    /// Returns the number of paths that need reprocessing (added + modified).
    pub fn dirty_count(&self) -> usize {
        self.added.len() + self.modified.len()
    }
}

/// Returns the first reason `current` is out of date relative to `previous`.
///
/// Pulls at most one change from the diff, so large unchanged prefixes are the
/// only cost paid. `None` means the property is up to date.
pub fn out_of_date_reason(
    current: &CollectionSnapshot,
    previous: &CollectionSnapshot,
    file_type: &str,
) -> Option<String> {
    current
        .diff_since(previous, file_type)
        .next()
        .map(|change| change.to_string())
}
