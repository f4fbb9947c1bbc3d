//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `calfeed_core::storage`, plus the decorators that keep feeds
//! consistent with writes. The backend is selected at compile time via
//! feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap storage, nothing persisted

#[cfg(not(feature = "inmemory"))]
compile_error!(
    "No storage backend selected. Enable the 'inmemory' feature. \
    Example: cargo build -p calfeed --features inmemory"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

pub mod invalidating;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;

pub use invalidating::{InvalidatingCompanyRepository, InvalidatingEventRepository};
