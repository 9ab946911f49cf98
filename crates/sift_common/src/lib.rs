//! Shared foundational types for the sift change-detection workspace.
//!
//! This crate provides the [`ContentDigest`] value type that the filesystem
//! walker attaches to every regular file it snapshots.

#![warn(missing_docs)]

pub mod digest;

pub use digest::ContentDigest;
