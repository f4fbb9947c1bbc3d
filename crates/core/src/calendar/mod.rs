mod error;
mod operations;
mod types;

pub use error::{CompanyError, EventError};
pub use operations::{
    filter_public_events, sort_events_chronologically, validate_company, validate_event,
};
pub use types::{Company, Event};
