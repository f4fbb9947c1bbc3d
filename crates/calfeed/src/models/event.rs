use chrono::{DateTime, Utc};
use serde::Deserialize;

use calfeed_core::calendar::Event;
use calfeed_core::serde::{deserialize_optional_datetime, deserialize_optional_string};

/// Request payload for creating a new event.
///
/// Times are RFC 3339 instants; any offset is normalised to UTC.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub is_public: bool,
}

impl CreateEvent {
    /// Converts the create request into an Event owned by `company_id`.
    pub fn into_event(self, company_id: &str) -> Event {
        let mut event = Event::new(company_id, self.title.trim(), self.start, self.end);
        if let Some(description) = self.description {
            event = event.with_description(description);
        }
        if let Some(location) = self.location {
            event = event.with_location(location);
        }
        event.is_public = self.is_public;
        event
    }
}

/// Request payload for updating an event.
///
/// Absent fields are left unchanged. An empty `description` or `location`
/// clears the field.
#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_public: Option<bool>,
}

impl UpdateEvent {
    /// Applies the update to an existing event.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(location) = self.location {
            event.location = Some(location).filter(|l| !l.trim().is_empty());
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(is_public) = self.is_public {
            event.is_public = is_public;
        }
    }
}
