//! Feed-invalidating repository decorators.
//!
//! These decorators wrap the repository traits so that every successful write
//! drops the cached feed of each company it touched, before the write returns
//! to its caller. Reads are passed through unchanged.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(InMemoryRepository::new());
//! let feeds = FeedService::new(repo.clone(), Arc::new(MemoryFeedCache::new()));
//!
//! let events = InvalidatingEventRepository::new(repo, feeds);
//! ```

mod company;
mod event;

pub use company::InvalidatingCompanyRepository;
pub use event::InvalidatingEventRepository;
