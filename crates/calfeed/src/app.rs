use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        companies::{create_company, get_company, list_company_events, update_company},
        events::{create_event, delete_event, get_event, update_event},
        feeds::get_feed,
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // Company routes
        .route("/companies", post(create_company))
        .route("/companies/{id}", get(get_company).put(update_company))
        .route(
            "/companies/{id}/events",
            get(list_company_events).post(create_event),
        )
        // Event routes
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .layer(cors);

    Router::new()
        .route("/feeds/{company_id}", get(get_feed))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
