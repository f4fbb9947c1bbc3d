//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use calfeed_core::calendar::{sort_events_chronologically, Company, Event};
use calfeed_core::feed::EventStore;
use calfeed_core::storage::{CompanyRepository, EventRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    companies: Arc<RwLock<HashMap<String, Company>>>,
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    async fn company_events(&self, company_id: &str, public_only: bool) -> Vec<Event> {
        let events = self.events.read().await;
        let mut matching: Vec<Event> = events
            .values()
            .filter(|e| e.company_id == company_id)
            .filter(|e| !public_only || e.is_public)
            .cloned()
            .collect();
        sort_events_chronologically(&mut matching);
        matching
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn list_events(&self, company_id: &str) -> Result<Vec<Event>> {
        Ok(self.company_events(company_id, false).await)
    }

    async fn create_event(&self, event: &Event) -> Result<()> {
        if !self.companies.read().await.contains_key(&event.company_id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Company",
                id: event.company_id.clone(),
            });
        }

        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &Event) -> Result<Event> {
        if !self.companies.read().await.contains_key(&event.company_id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Company",
                id: event.company_id.clone(),
            });
        }

        let mut events = self.events.write().await;
        let Some(stored) = events.get_mut(&event.id) else {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        };
        Ok(std::mem::replace(stored, event.clone()))
    }

    async fn delete_event(&self, id: Uuid) -> Result<Event> {
        let mut events = self.events.write().await;
        events.remove(&id).ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Event",
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl CompanyRepository for InMemoryRepository {
    async fn get_company(&self, id: &str) -> Result<Option<Company>> {
        let companies = self.companies.read().await;
        Ok(companies.get(id).cloned())
    }

    async fn create_company(&self, company: &Company) -> Result<()> {
        let mut companies = self.companies.write().await;
        if companies.contains_key(&company.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Company",
                id: company.id.clone(),
            });
        }
        companies.insert(company.id.clone(), company.clone());
        Ok(())
    }

    async fn update_company(&self, company: &Company) -> Result<()> {
        let mut companies = self.companies.write().await;
        if !companies.contains_key(&company.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Company",
                id: company.id.clone(),
            });
        }
        companies.insert(company.id.clone(), company.clone());
        Ok(())
    }
}

#[async_trait]
impl EventStore for InMemoryRepository {
    async fn get_company(&self, company_id: &str) -> Result<Option<Company>> {
        CompanyRepository::get_company(self, company_id).await
    }

    async fn list_public_events(&self, company_id: &str) -> Result<Vec<Event>> {
        Ok(self.company_events(company_id, true).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    async fn repo_with_company(id: &str) -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        repo.create_company(&Company::new(id, "Test Company"))
            .await
            .unwrap();
        repo
    }

    // ==================== Event CRUD Tests ====================

    #[tokio::test]
    async fn test_event_create_and_get() {
        let repo = repo_with_company("acme").await;
        let event = Event::new("acme", "Launch", at(15, 9), at(15, 10));

        repo.create_event(&event).await.unwrap();

        let retrieved = repo.get_event(event.id).await.unwrap();
        assert_eq!(retrieved, Some(event));
    }

    #[tokio::test]
    async fn test_event_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_event(Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_event_create_duplicate() {
        let repo = repo_with_company("acme").await;
        let event = Event::new("acme", "Launch", at(15, 9), at(15, 10));

        repo.create_event(&event).await.unwrap();
        let result = repo.create_event(&event).await;

        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_event_create_unknown_company() {
        let repo = InMemoryRepository::new();
        let event = Event::new("ghost", "Launch", at(15, 9), at(15, 10));

        let result = repo.create_event(&event).await;

        assert!(matches!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Company",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_event_update() {
        let repo = repo_with_company("acme").await;
        let mut event = Event::new("acme", "Original Title", at(15, 9), at(15, 10));
        repo.create_event(&event).await.unwrap();

        event.title = "Updated Title".to_string();
        let replaced = repo.update_event(&event).await.unwrap();
        assert_eq!(replaced.title, "Original Title");

        let retrieved = repo.get_event(event.id).await.unwrap().unwrap();
        assert_eq!(retrieved.title, "Updated Title");
    }

    #[tokio::test]
    async fn test_event_update_nonexistent() {
        let repo = repo_with_company("acme").await;
        let event = Event::new("acme", "Test", at(15, 9), at(15, 10));

        let result = repo.update_event(&event).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_event_delete_returns_removed_event() {
        let repo = repo_with_company("acme").await;
        let event = Event::new("acme", "Launch", at(15, 9), at(15, 10));
        repo.create_event(&event).await.unwrap();

        let removed = repo.delete_event(event.id).await.unwrap();

        assert_eq!(removed, event);
        assert!(repo.get_event(event.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_event_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_event(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_events_filters_by_company_and_sorts() {
        let repo = repo_with_company("acme").await;
        repo.create_company(&Company::new("other", "Other"))
            .await
            .unwrap();

        let late = Event::new("acme", "Late", at(20, 9), at(20, 10));
        let early = Event::new("acme", "Early", at(10, 9), at(10, 10)).private();
        let foreign = Event::new("other", "Foreign", at(12, 9), at(12, 10));
        for event in [&late, &early, &foreign] {
            repo.create_event(event).await.unwrap();
        }

        let events = repo.list_events("acme").await.unwrap();
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }

    // ==================== Company Tests ====================

    #[tokio::test]
    async fn test_company_create_and_get() {
        let repo = InMemoryRepository::new();
        let company = Company::new("acme", "Acme Corp");

        repo.create_company(&company).await.unwrap();

        let retrieved = CompanyRepository::get_company(&repo, "acme").await.unwrap();
        assert_eq!(retrieved, Some(company));
    }

    #[tokio::test]
    async fn test_company_create_duplicate() {
        let repo = repo_with_company("acme").await;
        let result = repo.create_company(&Company::new("acme", "Again")).await;
        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_company_update() {
        let repo = repo_with_company("acme").await;

        repo.update_company(&Company::new("acme", "Acme Renamed"))
            .await
            .unwrap();

        let retrieved = CompanyRepository::get_company(&repo, "acme")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(retrieved.name, "Acme Renamed");
    }

    #[tokio::test]
    async fn test_company_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.update_company(&Company::new("ghost", "Ghost")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    // ==================== Event Store Tests ====================

    #[tokio::test]
    async fn test_list_public_events_excludes_private() {
        let repo = repo_with_company("acme").await;
        let open = Event::new("acme", "Open", at(15, 9), at(15, 10));
        let closed = Event::new("acme", "Closed", at(15, 11), at(15, 12)).private();
        repo.create_event(&open).await.unwrap();
        repo.create_event(&closed).await.unwrap();

        let events = repo.list_public_events("acme").await.unwrap();

        assert_eq!(events, vec![open]);
    }

    #[tokio::test]
    async fn test_list_public_events_unknown_company_is_empty() {
        let repo = InMemoryRepository::new();
        let events = repo.list_public_events("ghost").await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_event_store_get_company() {
        let repo = repo_with_company("acme").await;
        let company = EventStore::get_company(&repo, "acme").await.unwrap();
        assert_eq!(company.map(|c| c.id), Some("acme".to_string()));
    }
}
