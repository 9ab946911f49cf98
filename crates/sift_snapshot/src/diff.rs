//! Lazy change detection between two entry mappings.
//!
//! Each call produces its own pull-based iterator. Work is done one change at
//! a time, so a caller that only needs to know whether anything changed stops
//! after the first item without paying for the rest of the comparison.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use serde::Serialize;

use crate::entry::EntrySnapshot;
use crate::entry_map::EntryMap;

/// The kind of a detected change.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum ChangeKind {
    /// The path exists now but did not before (or moved position, for ordered
    /// comparison).
    Added,
    /// The path existed before but does not now.
    Removed,
    /// The path exists in both snapshots with different content.
    Modified,
}

impl ChangeKind {
    fn describe(self) -> &'static str {
        match self {
            ChangeKind::Added => "has been added",
            ChangeKind::Removed => "has been removed",
            ChangeKind::Modified => "has changed",
        }
    }
}

/// A single change between a previous and a current snapshot.
///
/// `file_type` is an opaque reporting label supplied by the caller
/// (e.g. "Input"); it never influences comparison.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Change<'a> {
    /// Absolute path of the changed entry.
    pub path: &'a str,
    /// What happened to the path.
    pub kind: ChangeKind,
    /// Reporting label for the kind of file.
    pub file_type: &'a str,
}

impl<'a> Change<'a> {
    fn new(path: &'a str, kind: ChangeKind, file_type: &'a str) -> Self {
        Self {
            path,
            kind,
            file_type,
        }
    }
}

impl fmt::Display for Change<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut label = self.file_type.chars();
        if let Some(first) = label.next() {
            write!(f, "{}{} ", first.to_uppercase(), label.as_str())?;
        }
        write!(f, "file {} {}.", self.path, self.kind.describe())
    }
}

/// Order-insensitive comparison.
///
/// Walks the current mapping reporting additions and modifications, then
/// reports every previous path that was never matched as removed, in previous
/// mapping order.
#[derive(Debug)]
pub struct UnorderedChanges<'a> {
    current: slice::Iter<'a, (String, EntrySnapshot)>,
    previous: &'a EntryMap,
    matched: Vec<bool>,
    removed_cursor: usize,
    file_type: &'a str,
}

impl<'a> UnorderedChanges<'a> {
    pub(crate) fn new(current: &'a EntryMap, previous: &'a EntryMap, file_type: &'a str) -> Self {
        Self {
            current: current.as_slice().iter(),
            previous,
            matched: vec![false; previous.len()],
            removed_cursor: 0,
            file_type,
        }
    }
}

impl<'a> Iterator for UnorderedChanges<'a> {
    type Item = Change<'a>;

    fn next(&mut self) -> Option<Change<'a>> {
        for (path, snapshot) in self.current.by_ref() {
            let Some(position) = self.previous.position(path) else {
                return Some(Change::new(path, ChangeKind::Added, self.file_type));
            };
            self.matched[position] = true;
            let previous = &self.previous.as_slice()[position].1;
            if !snapshot.is_content_up_to_date(previous) {
                return Some(Change::new(path, ChangeKind::Modified, self.file_type));
            }
        }

        let previous = self.previous.as_slice();
        while self.removed_cursor < previous.len() {
            let position = self.removed_cursor;
            self.removed_cursor += 1;
            if !self.matched[position] {
                let path = previous[position].0.as_str();
                return Some(Change::new(path, ChangeKind::Removed, self.file_type));
            }
        }
        None
    }
}

impl FusedIterator for UnorderedChanges<'_> {}

/// Order-sensitive comparison.
///
/// Walks both mappings in lockstep. When the paths at a step differ, the
/// previous path is reported removed and the current path added, so any shift
/// in position invalidates the property even if no content changed.
#[derive(Debug)]
pub struct OrderedChanges<'a> {
    current: slice::Iter<'a, (String, EntrySnapshot)>,
    previous: slice::Iter<'a, (String, EntrySnapshot)>,
    pending: Option<Change<'a>>,
    file_type: &'a str,
}

impl<'a> OrderedChanges<'a> {
    pub(crate) fn new(current: &'a EntryMap, previous: &'a EntryMap, file_type: &'a str) -> Self {
        Self {
            current: current.as_slice().iter(),
            previous: previous.as_slice().iter(),
            pending: None,
            file_type,
        }
    }
}

impl<'a> Iterator for OrderedChanges<'a> {
    type Item = Change<'a>;

    fn next(&mut self) -> Option<Change<'a>> {
        if let Some(change) = self.pending.take() {
            return Some(change);
        }
        loop {
            let Some((current_path, current)) = self.current.next() else {
                return self
                    .previous
                    .next()
                    .map(|(path, _)| Change::new(path, ChangeKind::Removed, self.file_type));
            };
            let Some((previous_path, previous)) = self.previous.next() else {
                return Some(Change::new(current_path, ChangeKind::Added, self.file_type));
            };
            if current_path == previous_path {
                if !current.is_content_up_to_date(previous) {
                    return Some(Change::new(current_path, ChangeKind::Modified, self.file_type));
                }
            } else {
                self.pending = Some(Change::new(current_path, ChangeKind::Added, self.file_type));
                return Some(Change::new(previous_path, ChangeKind::Removed, self.file_type));
            }
        }
    }
}

impl FusedIterator for OrderedChanges<'_> {}

/// The change iterator returned by a diff, one variant per compare strategy.
#[derive(Debug)]
pub enum Changes<'a> {
    /// Changes from an order-insensitive comparison.
    Unordered(UnorderedChanges<'a>),
    /// Changes from an order-sensitive comparison.
    Ordered(OrderedChanges<'a>),
}

impl<'a> Iterator for Changes<'a> {
    type Item = Change<'a>;

    fn next(&mut self) -> Option<Change<'a>> {
        match self {
            Changes::Unordered(changes) => changes.next(),
            Changes::Ordered(changes) => changes.next(),
        }
    }
}

impl FusedIterator for Changes<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_common::ContentDigest;

    fn file(content: &[u8]) -> EntrySnapshot {
        EntrySnapshot::File(ContentDigest::from_bytes(content))
    }

    fn map(entries: &[(&str, EntrySnapshot)]) -> EntryMap {
        entries.iter().map(|(p, s)| (p.to_string(), *s)).collect()
    }

    fn summarize<'a>(changes: impl Iterator<Item = Change<'a>>) -> Vec<(&'a str, ChangeKind)> {
        changes.map(|c| (c.path, c.kind)).collect()
    }

    #[test]
    fn unordered_reports_added_modified_then_removed() {
        let previous = map(&[("/a", file(b"1")), ("/b", file(b"2")), ("/c", file(b"3"))]);
        let current = map(&[("/d", file(b"4")), ("/c", file(b"3")), ("/a", file(b"x"))]);

        let changes = summarize(UnorderedChanges::new(&current, &previous, "Input"));
        assert_eq!(
            changes,
            vec![
                ("/d", ChangeKind::Added),
                ("/a", ChangeKind::Modified),
                ("/b", ChangeKind::Removed),
            ]
        );
    }

    #[test]
    fn unordered_ignores_reordering() {
        let previous = map(&[("/a", file(b"1")), ("/b", file(b"2"))]);
        let current = map(&[("/b", file(b"2")), ("/a", file(b"1"))]);
        assert_eq!(UnorderedChanges::new(&current, &previous, "Input").count(), 0);
    }

    #[test]
    fn unordered_variant_change_is_modified() {
        let previous = map(&[("/a", EntrySnapshot::Directory)]);
        let current = map(&[("/a", file(b"1"))]);
        let changes = summarize(UnorderedChanges::new(&current, &previous, "Input"));
        assert_eq!(changes, vec![("/a", ChangeKind::Modified)]);
    }

    #[test]
    fn ordered_swap_reports_removed_added_pairs() {
        let previous = map(&[("/a", file(b"1")), ("/b", file(b"2"))]);
        let current = map(&[("/b", file(b"2")), ("/a", file(b"1"))]);

        let changes = summarize(OrderedChanges::new(&current, &previous, "Classpath"));
        assert_eq!(
            changes,
            vec![
                ("/a", ChangeKind::Removed),
                ("/b", ChangeKind::Added),
                ("/b", ChangeKind::Removed),
                ("/a", ChangeKind::Added),
            ]
        );
    }

    #[test]
    fn ordered_tail_changes() {
        let previous = map(&[("/a", file(b"1")), ("/b", file(b"2")), ("/c", file(b"3"))]);
        let shorter = map(&[("/a", file(b"1"))]);
        let removed = summarize(OrderedChanges::new(&shorter, &previous, "Input"));
        assert_eq!(removed, vec![("/b", ChangeKind::Removed), ("/c", ChangeKind::Removed)]);

        let added = summarize(OrderedChanges::new(&previous, &shorter, "Input"));
        assert_eq!(added, vec![("/b", ChangeKind::Added), ("/c", ChangeKind::Added)]);
    }

    #[test]
    fn ordered_modified_in_place() {
        let previous = map(&[("/a", file(b"1")), ("/b", file(b"2"))]);
        let current = map(&[("/a", file(b"1")), ("/b", file(b"changed"))]);
        let changes = summarize(OrderedChanges::new(&current, &previous, "Input"));
        assert_eq!(changes, vec![("/b", ChangeKind::Modified)]);
    }

    #[test]
    fn iterators_are_fused() {
        let previous = map(&[("/a", file(b"1"))]);
        let current = EntryMap::new();
        let mut changes = Changes::Ordered(OrderedChanges::new(&current, &previous, "Input"));
        assert!(changes.next().is_some());
        assert!(changes.next().is_none());
        assert!(changes.next().is_none());
    }

    #[test]
    fn display_capitalizes_file_type() {
        let change = Change::new("/src/a.rs", ChangeKind::Modified, "input");
        assert_eq!(change.to_string(), "Input file /src/a.rs has changed.");

        let change = Change::new("/out", ChangeKind::Removed, "Output");
        assert_eq!(change.to_string(), "Output file /out has been removed.");
    }

    #[test]
    fn display_without_file_type() {
        let change = Change::new("/x", ChangeKind::Added, "");
        assert_eq!(change.to_string(), "file /x has been added.");
    }
}
