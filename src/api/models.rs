//! API Request and Response Models

use crate::games::{GameType, OptionField};
use crate::hash::HashVerification;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One registered game and the options it accepts
#[derive(Debug, Clone, Serialize)]
pub struct GameInfo {
    pub id: GameType,
    pub options: Vec<OptionField>,
}

impl From<GameType> for GameInfo {
    fn from(game: GameType) -> Self {
        Self {
            id: game,
            options: game.schema().fields.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GamesResponse {
    pub games: Vec<GameInfo>,
}

/// POST /api/verify/hash body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashVerifyRequest {
    pub server_seed: String,
    pub server_seed_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashVerifyResponse {
    #[serde(flatten)]
    pub hash: HashVerification,
    pub is_valid: bool,
}

impl From<HashVerification> for HashVerifyResponse {
    fn from(hash: HashVerification) -> Self {
        let is_valid = hash.is_valid();
        Self { hash, is_valid }
    }
}
