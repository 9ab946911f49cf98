//! Snapshots of a single declared input root.

use std::sync::OnceLock;

use crate::entry::EntrySnapshot;

/// The captured state of one input root: a single file, or a directory
/// walked recursively.
///
/// Entries are kept in walk order. A shareable tree may later be registered by
/// the storage layer, which records the identity it assigned through
/// [`assign_id`](Self::assign_id). The id is set at most once and is visible to
/// every thread that reads it afterwards.
#[derive(Debug, Clone)]
pub struct TreeSnapshot {
    entries: Vec<(String, EntrySnapshot)>,
    shareable: bool,
    assigned_id: OnceLock<u64>,
}

impl TreeSnapshot {
    /// Id value a storage layer reports for a tree it has not registered yet.
    pub const UNASSIGNED: u64 = u64::MAX;

    /// Creates a tree snapshot from walker output.
    pub fn new(entries: Vec<(String, EntrySnapshot)>, shareable: bool) -> Self {
        Self {
            entries,
            shareable,
            assigned_id: OnceLock::new(),
        }
    }

    /// Creates a shareable tree snapshot that already carries a storage id.
    ///
    /// Passing [`UNASSIGNED`](Self::UNASSIGNED) leaves the tree unregistered.
    pub fn with_assigned_id(entries: Vec<(String, EntrySnapshot)>, id: u64) -> Self {
        let assigned_id = if id == Self::UNASSIGNED {
            OnceLock::new()
        } else {
            OnceLock::from(id)
        };
        Self {
            entries,
            shareable: true,
            assigned_id,
        }
    }

    /// Entries in walk order.
    pub fn entries(&self) -> &[(String, EntrySnapshot)] {
        &self.entries
    }

    /// Whether this tree may be cached and reused by identity.
    pub fn is_shareable(&self) -> bool {
        self.shareable
    }

    /// The id recorded by the storage layer, if any.
    ///
    /// Never returns [`UNASSIGNED`](Self::UNASSIGNED).
    pub fn assigned_id(&self) -> Option<u64> {
        self.assigned_id.get().copied()
    }

    /// Records the storage id for this tree.
    ///
    /// Reporting [`UNASSIGNED`](Self::UNASSIGNED) records nothing, so a real id
    /// can still be assigned later. Fails with the id already recorded if a real
    /// id was set before.
    pub fn assign_id(&self, id: u64) -> Result<(), u64> {
        if id == Self::UNASSIGNED {
            return Ok(());
        }
        self.assigned_id.set(id).map_err(|_| {
            *self
                .assigned_id
                .get()
                .unwrap_or(&Self::UNASSIGNED)
        })
    }

    /// Returns the id usable by a storage layer to reuse this tree.
    ///
    /// Only shareable trees with a real (non-sentinel) id qualify.
    pub fn shareable_id(&self) -> Option<u64> {
        if !self.shareable {
            return None;
        }
        self.assigned_id().filter(|&id| id != Self::UNASSIGNED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_common::ContentDigest;
    use std::sync::Arc;

    fn entries() -> Vec<(String, EntrySnapshot)> {
        vec![
            ("/src".to_string(), EntrySnapshot::Directory),
            (
                "/src/main.rs".to_string(),
                EntrySnapshot::File(ContentDigest::from_bytes(b"fn main() {}")),
            ),
        ]
    }

    #[test]
    fn new_tree_is_unassigned() {
        let tree = TreeSnapshot::new(entries(), true);
        assert!(tree.is_shareable());
        assert_eq!(tree.assigned_id(), None);
        assert_eq!(tree.shareable_id(), None);
        assert_eq!(tree.entries().len(), 2);
    }

    #[test]
    fn assign_once() {
        let tree = TreeSnapshot::new(entries(), true);
        assert_eq!(tree.assign_id(7), Ok(()));
        assert_eq!(tree.assign_id(8), Err(7));
        assert_eq!(tree.assigned_id(), Some(7));
        assert_eq!(tree.shareable_id(), Some(7));
    }

    #[test]
    fn sentinel_leaves_tree_unregistered() {
        let tree = TreeSnapshot::with_assigned_id(entries(), TreeSnapshot::UNASSIGNED);
        assert_eq!(tree.assigned_id(), None);
        assert_eq!(tree.shareable_id(), None);
        assert_eq!(tree.assign_id(4), Ok(()));
        assert_eq!(tree.shareable_id(), Some(4));
    }

    #[test]
    fn real_id_after_sentinel_report() {
        let tree = TreeSnapshot::new(entries(), true);
        assert_eq!(tree.assign_id(TreeSnapshot::UNASSIGNED), Ok(()));
        assert_eq!(tree.assigned_id(), None);
        assert_eq!(tree.assign_id(5), Ok(()));
        assert_eq!(tree.assign_id(TreeSnapshot::UNASSIGNED), Ok(()));
        assert_eq!(tree.assigned_id(), Some(5));
        assert_eq!(tree.shareable_id(), Some(5));
    }

    #[test]
    fn non_shareable_id_is_ignored() {
        let tree = TreeSnapshot::new(entries(), false);
        tree.assign_id(9).unwrap();
        assert_eq!(tree.assigned_id(), Some(9));
        assert_eq!(tree.shareable_id(), None);
    }

    #[test]
    fn clone_keeps_assigned_id() {
        let tree = TreeSnapshot::with_assigned_id(entries(), 3);
        let copy = tree.clone();
        assert_eq!(copy.assigned_id(), Some(3));
        assert_eq!(copy.entries(), tree.entries());

        let unregistered = TreeSnapshot::new(entries(), true);
        let copy = unregistered.clone();
        copy.assign_id(6).unwrap();
        assert_eq!(unregistered.assigned_id(), None);
    }

    #[test]
    fn id_visible_across_threads() {
        let tree = Arc::new(TreeSnapshot::new(entries(), true));
        let writer = Arc::clone(&tree);
        std::thread::spawn(move || writer.assign_id(42).unwrap())
            .join()
            .unwrap();
        assert_eq!(tree.shareable_id(), Some(42));
    }
}
