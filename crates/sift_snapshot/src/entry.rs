//! Per-path snapshot variants.

use serde::{Deserialize, Serialize};
use sift_common::ContentDigest;

use crate::fold::CacheKeySink;

/// The observed state of a single path at snapshot time.
///
/// Directories are identity-only: they carry no digest and are never
/// content-compared. `Missing` records a declared path that did not exist
/// when the walker ran.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum EntrySnapshot {
    /// A regular file and the digest of its content.
    File(ContentDigest),
    /// A directory node.
    Directory,
    /// A declared path with nothing on disk.
    Missing,
}

impl EntrySnapshot {
    /// Returns `true` for a directory marker.
    pub fn is_directory(&self) -> bool {
        matches!(self, EntrySnapshot::Directory)
    }

    /// Returns the content digest of a regular file, `None` otherwise.
    pub fn digest(&self) -> Option<&ContentDigest> {
        match self {
            EntrySnapshot::File(digest) => Some(digest),
            EntrySnapshot::Directory | EntrySnapshot::Missing => None,
        }
    }

    /// Returns `true` if this entry is unchanged relative to `previous`.
    ///
    /// Files compare by digest; directories and missing entries only match
    /// their own variant. Any change of variant counts as a modification.
    pub fn is_content_up_to_date(&self, previous: &EntrySnapshot) -> bool {
        match (self, previous) {
            (EntrySnapshot::File(current), EntrySnapshot::File(previous)) => current == previous,
            (EntrySnapshot::Directory, EntrySnapshot::Directory) => true,
            (EntrySnapshot::Missing, EntrySnapshot::Missing) => true,
            (EntrySnapshot::File(_), _)
            | (EntrySnapshot::Directory, _)
            | (EntrySnapshot::Missing, _) => false,
        }
    }

    /// Tag byte identifying the variant in a folded cache key.
    pub(crate) fn tag(&self) -> u8 {
        match self {
            EntrySnapshot::File(_) => 0x01,
            EntrySnapshot::Directory => 0x02,
            EntrySnapshot::Missing => 0x03,
        }
    }

    /// Appends the variant tag and, for files, the digest bytes.
    pub(crate) fn append_to_cache_key<S: CacheKeySink + ?Sized>(&self, sink: &mut S) {
        sink.append_bytes(&[self.tag()]);
        match self {
            EntrySnapshot::File(digest) => sink.append_bytes(digest.as_bytes()),
            EntrySnapshot::Directory | EntrySnapshot::Missing => {}
        }
    }
}
