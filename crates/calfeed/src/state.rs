//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see the invalidating repository
//! decorators, so no write path can skip feed invalidation.

use std::sync::Arc;

use calfeed_core::feed::FeedService;
use calfeed_core::storage::{CompanyRepository, EventRepository};

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Event repository (invalidating, wraps underlying storage).
    pub event_repo: Arc<dyn EventRepository>,
    /// Company repository (invalidating, wraps underlying storage).
    pub company_repo: Arc<dyn CompanyRepository>,
    /// Feed orchestrator shared with the repository decorators.
    pub feeds: FeedService,
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryFeedCache;
    use crate::storage::{
        InMemoryRepository, InvalidatingCompanyRepository, InvalidatingEventRepository,
    };

    impl AppState {
        /// Creates AppState with in-memory storage and an in-memory feed cache.
        pub fn new(config: &Config) -> Self {
            let repository = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryFeedCache::new().with_ttl(config.feed_cache_ttl()));
            let feeds = FeedService::new(repository.clone(), cache);

            tracing::debug!(ttl = ?config.feed_cache_ttl(), "Initialized in-memory feed cache");

            Self {
                event_repo: Arc::new(InvalidatingEventRepository::new(
                    repository.clone(),
                    feeds.clone(),
                )),
                company_repo: Arc::new(InvalidatingCompanyRepository::new(
                    repository,
                    feeds.clone(),
                )),
                feeds,
            }
        }
    }

    impl Default for AppState {
        fn default() -> Self {
            Self::new(&Config::default())
        }
    }
}
