//! Ordered and unordered comparison semantics.

use serde::{Deserialize, Serialize};

use crate::diff::{Changes, OrderedChanges, UnorderedChanges};
use crate::entry_map::EntryMap;
use crate::fold::{append_entry, CacheKeySink};

/// How a file property is compared and folded into a cache key.
///
/// `Unordered` treats the property as a set of `(path, content)` pairs;
/// `Ordered` treats it as a sequence, where position is part of the identity
/// (a classpath, for example).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareStrategy {
    /// Position is significant.
    Ordered,
    /// Position is irrelevant.
    #[default]
    Unordered,
}

impl CompareStrategy {
    /// Returns the lazy sequence of changes from `previous` to `current`.
    pub fn changes_since<'a>(
        self,
        current: &'a EntryMap,
        previous: &'a EntryMap,
        file_type: &'a str,
    ) -> Changes<'a> {
        match self {
            CompareStrategy::Unordered => {
                Changes::Unordered(UnorderedChanges::new(current, previous, file_type))
            }
            CompareStrategy::Ordered => {
                Changes::Ordered(OrderedChanges::new(current, previous, file_type))
            }
        }
    }

    /// Folds `snapshots` into `sink`.
    ///
    /// Unordered folding sorts entries by path bytes first so the result does
    /// not depend on traversal order. Ordered folding keeps mapping order.
    pub fn append_to_cache_key<S: CacheKeySink + ?Sized>(self, sink: &mut S, snapshots: &EntryMap) {
        match self {
            CompareStrategy::Unordered => {
                let mut sorted: Vec<_> = snapshots.iter().collect();
                sorted.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
                for (path, snapshot) in sorted {
                    append_entry(sink, path, snapshot);
                }
            }
            CompareStrategy::Ordered => {
                for (path, snapshot) in snapshots.iter() {
                    append_entry(sink, path, snapshot);
                }
            }
        }
    }
}
