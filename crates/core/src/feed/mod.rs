//! Subscription feed serving and cache consistency.

mod document;
mod error;
mod service;
mod traits;

pub use document::{FeedDocument, FeedResponse};
pub use error::{FeedError, Result};
pub use service::FeedService;
pub use traits::{EventStore, FeedCache};
