//! Company handlers.
//!
//! Renames go through the invalidating repository, so the feed picks up the
//! new display name on its next request.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};

use calfeed_core::calendar::{validate_company, Company, Event};
use calfeed_core::storage::RepositoryError;

use crate::{
    handlers::{error_response, AppError},
    models::{CreateCompany, UpdateCompany},
    state::AppState,
};

/// Looks up a company or fails with a `NotFound` repository error.
pub(crate) async fn find_company(state: &AppState, id: &str) -> Result<Company, AppError> {
    state
        .company_repo
        .get_company(id)
        .await?
        .ok_or_else(|| {
            RepositoryError::NotFound {
                entity_type: "Company",
                id: id.to_string(),
            }
            .into()
        })
}

/// Create a new company (POST /api/companies).
pub async fn create_company(
    State(state): State<AppState>,
    form_result: Result<Form<CreateCompany>, FormRejection>,
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

    let company = payload.into_company();
    validate_company(&company)?;

    state.company_repo.create_company(&company).await?;

    tracing::info!(company_id = %company.id, name = %company.name, "Created new company");

    Ok((StatusCode::CREATED, Json(company)).into_response())
}

/// Get a single company by ID (GET /api/companies/{id}).
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Company>, AppError> {
    Ok(Json(find_company(&state, &id).await?))
}

/// Rename a company (PUT /api/companies/{id}).
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form_result: Result<Form<UpdateCompany>, FormRejection>,
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

    let mut company = find_company(&state, &id).await?;
    payload.apply_to(&mut company);
    validate_company(&company)?;

    state.company_repo.update_company(&company).await?;

    tracing::info!(company_id = %id, name = %company.name, "Updated company");

    Ok(Json(company).into_response())
}

/// List every event of a company, private ones included (GET /api/companies/{id}/events).
pub async fn list_company_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Event>>, AppError> {
    find_company(&state, &id).await?;
    let events = state.event_repo.list_events(&id).await?;
    Ok(Json(events))
}
