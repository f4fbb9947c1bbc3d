use async_trait::async_trait;
use uuid::Uuid;

use crate::calendar::{Company, Event};

use super::Result;

/// Repository for event mutations and lookups.
///
/// Implementations that sit in front of a feed must report every successful
/// mutation to the feed cache before returning.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>>;

    /// Lists every event of a company, public and private, in chronological order.
    async fn list_events(&self, company_id: &str) -> Result<Vec<Event>>;

    /// Creates a new event.
    async fn create_event(&self, event: &Event) -> Result<()>;

    /// Updates an existing event, returning the version it replaced.
    ///
    /// The replaced event is taken in the same step as the write, so its
    /// `company_id` is the company the event actually left.
    async fn update_event(&self, event: &Event) -> Result<Event>;

    /// Deletes an event by its ID, returning the removed event.
    async fn delete_event(&self, id: Uuid) -> Result<Event>;
}

/// Repository for company operations.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Gets a company by its ID.
    async fn get_company(&self, id: &str) -> Result<Option<Company>>;

    /// Creates a new company.
    async fn create_company(&self, company: &Company) -> Result<()>;

    /// Updates an existing company.
    async fn update_company(&self, company: &Company) -> Result<()>;
}
