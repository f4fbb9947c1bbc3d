//! Feed cache backend implementations.
//!
//! This module provides concrete implementations of the
//! `calfeed_core::feed::FeedCache` trait.
//!
//! # Feature Flags
//!
//! - `memory` (default): In-process concurrent map

#[cfg(not(feature = "memory"))]
compile_error!(
    "No cache backend selected. Enable the 'memory' feature. \
    Example: cargo build -p calfeed --features memory"
);

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryFeedCache;
