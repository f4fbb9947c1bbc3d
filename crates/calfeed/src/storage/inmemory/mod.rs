//! In-memory storage backend.
//!
//! Stores companies and events in HashMaps wrapped in `Arc<RwLock<_>>`. Data
//! is not persisted and is lost when the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use calfeed::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.create_company(&Company::new("acme", "Acme")).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
