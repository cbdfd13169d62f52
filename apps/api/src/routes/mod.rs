pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis/parse",
            post(handlers::handle_parse_analysis),
        )
        .route(
            "/api/v1/analysis/roadmap",
            post(handlers::handle_parse_roadmap),
        )
        .fallback(not_found)
        .with_state(state)
}
