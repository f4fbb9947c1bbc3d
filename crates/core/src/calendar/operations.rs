use super::error::{CompanyError, EventError};
use super::types::{Company, Event};

/// Filters events down to the ones that may appear in a published feed.
pub fn filter_public_events<'a, I>(events: I) -> impl Iterator<Item = &'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events.into_iter().filter(|event| event.is_public)
}

/// Sorts events chronologically, breaking ties by ID so the order is stable.
pub fn sort_events_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
}

/// Validates a company before creation or update.
pub fn validate_company(company: &Company) -> Result<(), CompanyError> {
    if company.id.is_empty() {
        return Err(CompanyError::EmptyId);
    }
    if !company
        .id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(CompanyError::InvalidId(company.id.clone()));
    }
    if company.name.trim().is_empty() {
        return Err(CompanyError::EmptyName);
    }
    if company.name.chars().count() > 100 {
        return Err(CompanyError::NameTooLong);
    }
    Ok(())
}

/// Validates an event before creation or update.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title.chars().count() > 200 {
        return Err(EventError::TitleTooLong);
    }
    if event.end <= event.start {
        return Err(EventError::InvalidTimeRange);
    }
    Ok(())
}
