//! Feed-invalidating event repository decorator.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use calfeed_core::calendar::Event;
use calfeed_core::feed::FeedService;
use calfeed_core::storage::{EventRepository, Result};

/// Event repository decorator that keeps company feeds consistent.
///
/// - **Reads**: Pass straight through to the wrapped repository
/// - **Writes**: Persist, then invalidate every affected company feed before
///   returning. Failed writes invalidate nothing.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
pub struct InvalidatingEventRepository<R>
where
    R: EventRepository,
{
    repository: Arc<R>,
    feeds: FeedService,
}

impl<R> InvalidatingEventRepository<R>
where
    R: EventRepository,
{
    /// Creates a new invalidating event repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository
    /// * `feeds` - The feed service whose cache must follow every write
    pub fn new(repository: Arc<R>, feeds: FeedService) -> Self {
        Self { repository, feeds }
    }
}

#[async_trait]
impl<R> EventRepository for InvalidatingEventRepository<R>
where
    R: EventRepository + 'static,
{
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        self.repository.get_event(id).await
    }

    async fn list_events(&self, company_id: &str) -> Result<Vec<Event>> {
        self.repository.list_events(company_id).await
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        self.repository.create_event(event).await?;

        self.feeds.invalidate(&event.company_id);

        tracing::debug!(event_id = %event.id, company_id = %event.company_id, "Event created");
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<Event> {
        let replaced = self.repository.update_event(event).await?;

        self.feeds.invalidate(&event.company_id);
        if replaced.company_id != event.company_id {
            self.feeds.invalidate(&replaced.company_id);
        }

        tracing::debug!(
            event_id = %event.id,
            company_id = %event.company_id,
            previous_company_id = %replaced.company_id,
            "Event updated"
        );
        Ok(replaced)
    }

    async fn delete_event(&self, id: Uuid) -> Result<Event> {
        let removed = self.repository.delete_event(id).await?;

        self.feeds.invalidate(&removed.company_id);

        tracing::debug!(event_id = %id, company_id = %removed.company_id, "Event deleted");
        Ok(removed)
    }
}
