//! Request Handlers

use super::{
    errors::ApiError,
    middleware::RequestId,
    models::*,
};
use crate::games::GameType;
use crate::verification::{verify_hash, verify_outcome_async, VerificationReport, VerificationRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use std::sync::Arc;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Running".to_string(),
        version: state.version.clone(),
    })
}

/// GET /api/games
pub async fn games_handler() -> Json<GamesResponse> {
    Json(GamesResponse {
        games: GameType::ALL.into_iter().map(GameInfo::from).collect(),
    })
}

/// POST /api/verify/hash
pub async fn verify_hash_handler(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<HashVerifyRequest>, JsonRejection>,
) -> Result<Json<HashVerifyResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::bad_request(request_id.0.clone(), e.body_text()))?;

    let verification = verify_hash(&payload.server_seed, &payload.server_seed_hash)
        .map_err(|e| ApiError::from_verifier(request_id.0.clone(), e))?;

    Ok(Json(verification.into()))
}

/// POST /api/verify/outcome
pub async fn verify_outcome_handler(
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<VerificationRequest>, JsonRejection>,
) -> Result<Json<VerificationReport>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(request_id.0.clone(), e.body_text()))?;

    tracing::debug!(request_id = %request_id.0, game = %request.game, "verifying outcome");

    let report = verify_outcome_async(&request)
        .await
        .map_err(|e| ApiError::from_verifier(request_id.0.clone(), e))?;

    Ok(Json(report))
}

/// Fallback for unmatched routes
pub async fn not_found_handler(Extension(request_id): Extension<RequestId>) -> ApiError {
    ApiError::not_found(request_id.0, "No such endpoint".to_string())
}
