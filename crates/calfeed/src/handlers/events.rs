//! Event CRUD handlers.
//!
//! These handlers use repository trait objects for storage access. Feed
//! invalidation is handled by the invalidating repository decorator, so a
//! handler that returns success has already dropped the stale feed.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use uuid::Uuid;

use calfeed_core::calendar::{validate_event, Event};
use calfeed_core::storage::RepositoryError;

use crate::{
    handlers::{companies::find_company, error_response, AppError},
    models::{CreateEvent, UpdateEvent},
    state::AppState,
};

async fn find_event(state: &AppState, id: Uuid) -> Result<Event, AppError> {
    state.event_repo.get_event(id).await?.ok_or_else(|| {
        RepositoryError::NotFound {
            entity_type: "Event",
            id: id.to_string(),
        }
        .into()
    })
}

/// Create a new event for a company (POST /api/companies/{id}/events).
pub async fn create_event(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
    form_result: Result<Form<CreateEvent>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(payload) = match form_result {
        Ok(form) => form,
        Err(e) => {
            return Ok(error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to parse form: {e}"),
            )
            .into_response())
        }
    };

    tracing::debug!(payload = ?payload, "Received create event request");

    let company = find_company(&state, &company_id).await?;

    let event = payload.into_event(&company.id);
    validate_event(&event)?;

    state.event_repo.create_event(&event).await?;

    tracing::info!(
        event_id = %event.id,
        company_id = %event.company_id,
        title = %event.title,
        "Created new event"
    );

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

/// Get a single event by ID (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    Ok(Json(find_event(&state, id).await?))
}

/// Update an event by ID (PUT /api/events/{id}).
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    form_result: Result<Form<UpdateEvent>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(payload) = match form_result {
        Ok(form) => form,
        Err(e) => {
            return Ok(error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to parse form: {e}"),
            )
            .into_response())
        }
    };

    let mut event = find_event(&state, id).await?;
    payload.apply_to(&mut event);
    validate_event(&event)?;

    state.event_repo.update_event(&event).await?;

    tracing::info!(event_id = %id, company_id = %event.company_id, "Updated event");

    Ok(Json(event).into_response())
}

/// Delete an event by ID (DELETE /api/events/{id}).
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state.event_repo.delete_event(id).await?;

    tracing::info!(event_id = %id, company_id = %removed.company_id, "Deleted event");

    Ok(StatusCode::OK)
}
