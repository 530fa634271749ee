//! Route Definitions

use super::handlers::*;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build the API router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/games", get(games_handler))
        .route("/api/verify/hash", post(verify_hash_handler))
        .route("/api/verify/outcome", post(verify_outcome_handler))
        .fallback(not_found_handler)
        .with_state(state)
}
