//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Courses
        .route("/courses", post(handlers::create_course))
        .route("/courses/{course_id}", get(handlers::get_course))
        .route("/users/{user_id}/courses", get(handlers::list_courses))
        // Study sessions
        .route("/study-sessions", post(handlers::create_study_session))
        .route("/study-sessions/conflict-check", post(handlers::check_session_conflict))
        .route("/study-sessions/{session_id}", put(handlers::update_study_session))
        .route("/study-sessions/{session_id}", delete(handlers::delete_study_session))
        .route("/study-sessions/{session_id}/complete", post(handlers::complete_study_session))
        .route("/users/{user_id}/study-sessions", get(handlers::list_study_sessions))
        // Charts
        .route("/courses/{course_id}/charts/progression", get(handlers::get_progression_chart))
        .route("/courses/{course_id}/charts/workload", get(handlers::get_workload_chart));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
