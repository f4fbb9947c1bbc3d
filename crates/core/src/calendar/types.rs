use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A company that publishes its public events through a subscription feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Identifier used in the shareable feed link.
    pub id: String,
    /// Display name shown by subscribing calendar applications.
    pub name: String,
}

impl Company {
    /// Creates a new company with the given identifier and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A scheduled event owned by a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier, never reassigned.
    pub id: Uuid,
    /// The company this event belongs to.
    pub company_id: String,
    pub title: String,
    /// Free-form description; empty when the user left it blank.
    pub description: String,
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Only public events are ever published in a feed.
    pub is_public: bool,
}

impl Event {
    /// Creates a new public event with no description or location.
    pub fn new(
        company_id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id: company_id.into(),
            title: title.into(),
            description: String::new(),
            location: None,
            start,
            end,
            is_public: true,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks this event as private, hiding it from every feed.
    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}
