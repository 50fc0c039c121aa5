//! Filesystem-backed repositories.

mod cache;

pub use cache::FileCacheSlot;
