use std::sync::Arc;

use chrono::{DateTime, Utc};

/// A generated subscription document.
///
/// The content is shared, immutable text: handing a document out never copies
/// it, and no holder can change what other holders see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub company_id: String,
    pub content: Arc<str>,
    pub generated_at: DateTime<Utc>,
}

impl FeedDocument {
    /// Creates a document for `company_id`.
    pub fn new(
        company_id: impl Into<String>,
        content: impl Into<Arc<str>>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            content: content.into(),
            generated_at,
        }
    }
}

/// The outcome of a feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedResponse {
    pub content: Arc<str>,
    /// Whether the content came from the cache rather than a fresh render.
    pub served_from_cache: bool,
}
