//! File collection snapshots and change detection for incremental builds.
//!
//! The filesystem walker captures each declared input root as a [`TreeSnapshot`].
//! The trees of one task property are merged into a [`CollectionSnapshot`], which
//! can be diffed lazily against the snapshot from the previous run and folded
//! into a deterministic cache key. A [`CompareStrategy`] decides whether the
//! position of entries is significant.

#![warn(missing_docs)]

pub mod collection;
pub mod diff;
pub mod entry;
pub mod entry_map;
pub mod fold;
pub mod strategy;
pub mod tree;

pub use collection::CollectionSnapshot;
pub use diff::{Change, ChangeKind, Changes};
pub use entry::EntrySnapshot;
pub use entry_map::EntryMap;
pub use fold::CacheKeySink;
pub use strategy::CompareStrategy;
pub use tree::TreeSnapshot;
