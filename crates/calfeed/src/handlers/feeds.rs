//! Subscription feed download.
//!
//! Calendar applications poll this endpoint; it never writes to the event
//! store and only populates the feed cache.

use axum::{
    extract::{Path, State},
    http::{header, HeaderName},
    response::IntoResponse,
};

use crate::{handlers::AppError, state::AppState};

const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Download a company's feed (GET /feeds/{company_id}).
///
/// Accepts an optional `.ics` suffix so links can end in a file extension.
pub async fn get_feed(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company_id = company_id.strip_suffix(".ics").unwrap_or(&company_id);

    let feed = state.feeds.get_feed(company_id).await?;

    let cache_status = if feed.served_from_cache { "HIT" } else { "MISS" };
    tracing::trace!(%company_id, cache = cache_status, "Serving feed");

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{company_id}.ics\""),
            ),
            (X_CACHE, cache_status.to_string()),
        ],
        feed.content.to_string(),
    ))
}
