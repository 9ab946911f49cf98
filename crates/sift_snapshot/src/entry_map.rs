//! Insertion-ordered path → entry mapping backing a collection snapshot.

use std::collections::HashMap;

use crate::entry::EntrySnapshot;

/// A mapping from absolute path to [`EntrySnapshot`] that remembers the order
/// in which paths were first inserted.
///
/// Keys are unique. Re-inserting an existing path replaces its snapshot but
/// keeps the original position, so iteration order is always first-seen order.
#[derive(Debug, Clone, Default)]
pub struct EntryMap {
    entries: Vec<(String, EntrySnapshot)>,
    index: HashMap<String, usize>,
}

impl EntryMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts or replaces the snapshot for `path`, returning the replaced one.
    pub fn insert(&mut self, path: impl Into<String>, snapshot: EntrySnapshot) -> Option<EntrySnapshot> {
        let path = path.into();
        if let Some(&position) = self.index.get(&path) {
            let slot = &mut self.entries[position].1;
            return Some(std::mem::replace(slot, snapshot));
        }
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, snapshot));
        None
    }

    /// Returns the snapshot stored for `path`.
    pub fn get(&self, path: &str) -> Option<&EntrySnapshot> {
        self.position(path).map(|position| &self.entries[position].1)
    }

    /// Returns the insertion position of `path`.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.index.get(path).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &EntrySnapshot)> + '_ {
        self.entries
            .iter()
            .map(|(path, snapshot)| (path.as_str(), snapshot))
    }

    pub(crate) fn as_slice(&self) -> &[(String, EntrySnapshot)] {
        &self.entries
    }
}

/// Maps are equal when they hold the same entries in the same order.
impl PartialEq for EntryMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for EntryMap {}

impl<P: Into<String>> FromIterator<(P, EntrySnapshot)> for EntryMap {
    fn from_iter<I: IntoIterator<Item = (P, EntrySnapshot)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = EntryMap::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<P: Into<String>> Extend<(P, EntrySnapshot)> for EntryMap {
    fn extend<I: IntoIterator<Item = (P, EntrySnapshot)>>(&mut self, iter: I) {
        for (path, snapshot) in iter {
            self.insert(path, snapshot);
        }
    }
}
