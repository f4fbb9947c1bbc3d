//! In-memory feed cache backend.
//!
//! Provides a sharded concurrent map keyed by company ID with optional
//! time-based expiry, for single-instance deployments.

mod cache;

pub use cache::MemoryFeedCache;
