use thiserror::Error;

/// Errors that can occur when validating a company.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompanyError {
    #[error("Company ID cannot be empty")]
    EmptyId,
    #[error("Company ID may only contain lowercase letters, digits, '-' and '_': {0}")]
    InvalidId(String),
    #[error("Company name cannot be empty")]
    EmptyName,
    #[error("Company name too long (max 100 characters)")]
    NameTooLong,
}

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Event end must be after its start")]
    InvalidTimeRange,
}
