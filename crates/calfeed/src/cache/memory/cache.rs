//! In-memory feed cache implementation.
//!
//! Each company owns one slot in a `DashMap`, so operations on different
//! companies only contend when they hash to the same shard, and every
//! operation on one company is atomic under that shard's lock.
//!
//! A slot keeps its generation number after its document is evicted. That is
//! what lets a render that began before an eviction be rejected when it tries
//! to store its result.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use calfeed_core::feed::{FeedCache, FeedDocument};

/// A cached document with optional expiration.
#[derive(Debug, Clone)]
struct CachedDocument {
    document: FeedDocument,
    expires_at: Option<Instant>,
}

impl CachedDocument {
    /// Creates a new cached document with optional TTL.
    fn new(document: FeedDocument, ttl: Option<Duration>) -> Self {
        let expires_at = ttl.map(|d| Instant::now() + d);
        Self {
            document,
            expires_at,
        }
    }

    /// Returns true if this document has expired.
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Instant::now() > exp)
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    cached: Option<CachedDocument>,
}

/// In-memory feed cache.
///
/// Cloning is cheap and every clone shares the same entries. Expired
/// documents read as absent and are replaced by the next store (lazy
/// expiration).
#[derive(Debug, Clone, Default)]
pub struct MemoryFeedCache {
    slots: Arc<DashMap<String, Slot>>,
    ttl: Option<Duration>,
}

impl MemoryFeedCache {
    /// Creates a cache whose documents live until evicted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how long a stored document stays readable.
    ///
    /// `None` disables time-based expiry.
    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }
}

impl FeedCache for MemoryFeedCache {
    fn get(&self, company_id: &str) -> Option<FeedDocument> {
        let slot = self.slots.get(company_id)?;
        match &slot.cached {
            Some(cached) if !cached.is_expired() => Some(cached.document.clone()),
            _ => None,
        }
    }

    fn put(&self, company_id: &str, document: FeedDocument) {
        let mut slot = self.slots.entry(company_id.to_string()).or_default();
        slot.cached = Some(CachedDocument::new(document, self.ttl));
    }

    fn evict(&self, company_id: &str) {
        let mut slot = self.slots.entry(company_id.to_string()).or_default();
        slot.generation += 1;
        slot.cached = None;
    }

    fn generation(&self, company_id: &str) -> u64 {
        self.slots
            .get(company_id)
            .map_or(0, |slot| slot.generation)
    }

    fn put_if_generation(
        &self,
        company_id: &str,
        document: FeedDocument,
        generation: u64,
    ) -> bool {
        let mut slot = self.slots.entry(company_id.to_string()).or_default();
        if slot.generation != generation {
            return false;
        }
        slot.cached = Some(CachedDocument::new(document, self.ttl));
        true
    }

    fn cached_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.cached.as_ref().is_some_and(|c| !c.is_expired()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    fn document(company_id: &str, content: &str) -> FeedDocument {
        FeedDocument::new(company_id, content, Utc::now())
    }

    #[test]
    fn test_put_and_get() {
        let cache = MemoryFeedCache::new();
        cache.put("acme", document("acme", "BEGIN:VCALENDAR"));

        let cached = cache.get("acme").unwrap();
        assert_eq!(&*cached.content, "BEGIN:VCALENDAR");
        assert_eq!(cached.company_id, "acme");
    }

    #[test]
    fn test_get_nonexistent() {
        let cache = MemoryFeedCache::new();
        assert!(cache.get("nobody").is_none());
    }

    #[test]
    fn test_put_replaces_existing() {
        let cache = MemoryFeedCache::new();
        cache.put("acme", document("acme", "first"));
        cache.put("acme", document("acme", "second"));

        assert_eq!(&*cache.get("acme").unwrap().content, "second");
        assert_eq!(cache.cached_count(), 1);
    }

    #[test]
    fn test_evict_removes_document() {
        let cache = MemoryFeedCache::new();
        cache.put("acme", document("acme", "doc"));

        cache.evict("acme");

        assert!(cache.get("acme").is_none());
        assert_eq!(cache.cached_count(), 0);
    }

    #[test]
    fn test_evict_unseen_company_bumps_generation() {
        let cache = MemoryFeedCache::new();
        cache.evict("nobody");
        assert!(cache.get("nobody").is_none());
        assert_eq!(cache.generation("nobody"), 1);
        assert_eq!(cache.cached_count(), 0);
    }

    #[test]
    fn test_generation_of_unseen_company_does_not_register() {
        let cache = MemoryFeedCache::new();

        assert_eq!(cache.generation("nobody"), 0);

        assert!(cache.slots.is_empty());
    }

    #[test]
    fn test_evict_only_affects_one_company() {
        let cache = MemoryFeedCache::new();
        cache.put("a", document("a", "doc a"));
        cache.put("b", document("b", "doc b"));

        cache.evict("a");

        assert!(cache.get("a").is_none());
        assert_eq!(&*cache.get("b").unwrap().content, "doc b");
    }

    #[test]
    fn test_evict_bumps_generation() {
        let cache = MemoryFeedCache::new();
        let before = cache.generation("acme");

        cache.evict("acme");

        assert_eq!(cache.generation("acme"), before + 1);
    }

    #[test]
    fn test_put_if_generation_accepts_current() {
        let cache = MemoryFeedCache::new();
        let generation = cache.generation("acme");

        assert!(cache.put_if_generation("acme", document("acme", "doc"), generation));
        assert!(cache.get("acme").is_some());
    }

    #[test]
    fn test_put_if_generation_rejects_after_evict() {
        let cache = MemoryFeedCache::new();
        let generation = cache.generation("acme");

        cache.evict("acme");

        assert!(!cache.put_if_generation("acme", document("acme", "stale"), generation));
        assert!(cache.get("acme").is_none());
    }

    #[test]
    fn test_plain_put_keeps_generation() {
        let cache = MemoryFeedCache::new();
        let generation = cache.generation("acme");

        cache.put("acme", document("acme", "doc"));

        assert_eq!(cache.generation("acme"), generation);
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = MemoryFeedCache::new().with_ttl(Some(Duration::from_millis(50)));
        cache.put("acme", document("acme", "short-lived"));

        assert!(cache.get("acme").is_some());

        std::thread::sleep(Duration::from_millis(100));

        assert!(cache.get("acme").is_none());
        assert_eq!(cache.cached_count(), 0);
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let cache = MemoryFeedCache::new().with_ttl(None);
        cache.put("acme", document("acme", "persistent"));

        std::thread::sleep(Duration::from_millis(10));

        assert!(cache.get("acme").is_some());
    }

    #[test]
    fn test_clones_share_entries() {
        let cache = MemoryFeedCache::new();
        let other = cache.clone();

        cache.put("acme", document("acme", "shared"));
        assert!(other.get("acme").is_some());

        other.evict("acme");
        assert!(cache.get("acme").is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_eviction_visible_across_threads() {
        let cache = MemoryFeedCache::new();

        for round in 0..200 {
            cache.put("acme", document("acme", &format!("round {round}")));

            let writer = cache.clone();
            tokio::spawn(async move { writer.evict("acme") })
                .await
                .unwrap();

            let reader = cache.clone();
            let seen = tokio::spawn(async move { reader.get("acme") })
                .await
                .unwrap();
            assert!(seen.is_none(), "round {round} observed an evicted document");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_companies() {
        let cache = MemoryFeedCache::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    let company_id = format!("company-{i}");
                    for _ in 0..100 {
                        let generation = cache.generation(&company_id);
                        cache.put_if_generation(
                            &company_id,
                            document(&company_id, "doc"),
                            generation,
                        );
                        assert!(cache.get(&company_id).is_some());
                        cache.evict(&company_id);
                        assert!(cache.get(&company_id).is_none());
                    }
                    cache.put(&company_id, document(&company_id, "final"));
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.cached_count(), 16);
    }
}
