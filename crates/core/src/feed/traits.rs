use async_trait::async_trait;

use crate::calendar::{Company, Event};
use crate::storage::Result;

use super::FeedDocument;

/// Read-side view of the event store used to build feeds.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Gets a company by its ID.
    async fn get_company(&self, company_id: &str) -> Result<Option<Company>>;

    /// Lists the public events of a company, in the order they should be published.
    async fn list_public_events(&self, company_id: &str) -> Result<Vec<Event>>;
}

/// Process-local store of the latest document per company.
///
/// All operations are in-memory and total: they never fail and never block on
/// I/O. Each company key also carries a generation number that `evict` bumps,
/// so a render that started before an eviction can be told apart from one that
/// started after it.
pub trait FeedCache: Send + Sync {
    /// Gets the cached document for a company, if any.
    fn get(&self, company_id: &str) -> Option<FeedDocument>;

    /// Stores a document, replacing any existing one.
    fn put(&self, company_id: &str, document: FeedDocument);

    /// Removes the cached document and bumps the company's generation.
    ///
    /// The generation is bumped even for a company never seen before, so a
    /// render that read generation 0 earlier cannot store its result. Once
    /// this returns, no caller observes the removed document.
    fn evict(&self, company_id: &str);

    /// Returns the current generation of a company key, 0 if never seen.
    ///
    /// Reading a generation never registers the key.
    fn generation(&self, company_id: &str) -> u64;

    /// Stores a document only if the generation still equals `generation`.
    ///
    /// Returns `false`, leaving the cache untouched, when the company was
    /// evicted after `generation` was read.
    fn put_if_generation(&self, company_id: &str, document: FeedDocument, generation: u64)
        -> bool;

    /// Returns the number of companies with a cached document.
    fn cached_count(&self) -> usize;
}
