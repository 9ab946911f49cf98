//! Cache keys and up-to-date checks over file collection snapshots.
//!
//! This crate hashes folded snapshots into [`CacheKey`]s, combines the keys
//! of a task's file properties into a single task key, and summarizes the
//! changes reported by a diff for the scheduler.

#![warn(missing_docs)]

pub mod changes;
pub mod error;
pub mod key;
pub mod task;

pub use changes::{out_of_date_reason, ChangeSet};
pub use error::CacheError;
pub use key::{CacheKey, CacheKeyBuilder};
pub use task::TaskKeyBuilder;
