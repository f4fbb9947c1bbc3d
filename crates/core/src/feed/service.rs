//! Feed orchestration.
//!
//! Implements cache-aside for subscription documents:
//! - **Reads**: return the cached document, or fetch events, encode, cache and return
//! - **Writes**: mutation paths call [`FeedService::invalidate`] after every
//!   successful change to a company's events

use std::sync::Arc;

use chrono::Utc;

use crate::ics::encode_feed_at;

use super::{EventStore, FeedCache, FeedDocument, FeedError, FeedResponse, Result};

/// Single entry point for serving and invalidating company feeds.
#[derive(Clone)]
pub struct FeedService {
    store: Arc<dyn EventStore>,
    cache: Arc<dyn FeedCache>,
}

impl FeedService {
    /// Creates a new feed service.
    ///
    /// # Arguments
    ///
    /// * `store` - Source of companies and their public events
    /// * `cache` - Store for generated documents, shared by every caller
    pub fn new(store: Arc<dyn EventStore>, cache: Arc<dyn FeedCache>) -> Self {
        Self { store, cache }
    }

    /// Returns the current feed for a company.
    ///
    /// On a miss the document is rendered from the event store and cached,
    /// unless the company was invalidated while rendering. A failed fetch
    /// caches nothing and leaves any existing document in place.
    pub async fn get_feed(&self, company_id: &str) -> Result<FeedResponse> {
        if let Some(document) = self.cache.get(company_id) {
            tracing::trace!(%company_id, "Cache hit for feed");
            return Ok(FeedResponse {
                content: document.content,
                served_from_cache: true,
            });
        }

        tracing::trace!(%company_id, "Cache miss for feed");

        // Read before any store access: an invalidation from here on must win.
        let generation = self.cache.generation(company_id);

        let company = self
            .store
            .get_company(company_id)
            .await
            .inspect_err(|err| tracing::warn!(%company_id, error = %err, "Failed to load company"))?
            .ok_or_else(|| FeedError::CompanyNotFound(company_id.to_string()))?;

        let events = self
            .store
            .list_public_events(company_id)
            .await
            .inspect_err(|err| tracing::warn!(%company_id, error = %err, "Failed to load events"))?;

        let generated_at = Utc::now();
        let content: Arc<str> = encode_feed_at(&company.name, &events, generated_at).into();

        tracing::debug!(
            %company_id,
            events = events.len(),
            bytes = content.len(),
            "Generated feed"
        );

        let document = FeedDocument::new(company_id, content.clone(), generated_at);
        if !self
            .cache
            .put_if_generation(company_id, document, generation)
        {
            tracing::debug!(%company_id, "Feed invalidated while generating, not caching");
        }

        Ok(FeedResponse {
            content,
            served_from_cache: false,
        })
    }

    /// Drops the cached feed of a company.
    ///
    /// Called synchronously by every successful event mutation, before the
    /// mutation reports success to its own caller.
    pub fn invalidate(&self, company_id: &str) {
        tracing::debug!(%company_id, "Invalidating feed");
        self.cache.evict(company_id);
    }

    /// Returns the number of companies with a cached feed.
    pub fn cached_count(&self) -> usize {
        self.cache.cached_count()
    }
}
