//! Verification pipeline
//!
//! request → field checks → options → base seed → commitment check → decode
//! → display. Everything that can be rejected is rejected before the first
//! draw. A commitment mismatch is part of the report, not an error.

use crate::errors::{ValidationError, VerifierError, VerifierResult};
use crate::games::{render, GameOutcome, GameRequest, GameType};
use crate::hash::HashVerification;
use crate::seed::CompositeSeed;
use serde::{Deserialize, Deserializer, Serialize};

/// Inputs disclosed for one bet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub server_seed: String,
    pub client_seed: String,
    #[serde(deserialize_with = "string_or_number")]
    pub nonce: String,
    pub server_seed_hash: String,
    /// Game id, e.g. `mines`
    pub game: String,
    #[serde(default)]
    pub options: serde_json::Value,
}

/// Result of verifying one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub game: GameType,
    pub seed: String,
    pub hash: HashVerification,
    pub hash_valid: bool,
    pub outcome: GameOutcome,
    pub display: String,
}

/// Per-entry batch result, in input order
pub type BatchResult = Vec<VerifierResult<VerificationReport>>;

impl VerificationRequest {
    pub fn new(
        seed: CompositeSeed,
        server_seed_hash: impl Into<String>,
        game: GameType,
        options: serde_json::Value,
    ) -> Self {
        Self {
            server_seed: seed.server_seed,
            client_seed: seed.client_seed,
            nonce: seed.nonce,
            server_seed_hash: server_seed_hash.into(),
            game: game.id().to_string(),
            options,
        }
    }

    pub fn composite_seed(&self) -> CompositeSeed {
        CompositeSeed::new(&self.server_seed, &self.client_seed, &self.nonce)
    }

    /// Every check that does not need a draw
    pub fn prepare(&self) -> VerifierResult<GameRequest> {
        for (field, value) in [
            ("server_seed", &self.server_seed),
            ("client_seed", &self.client_seed),
            ("nonce", &self.nonce),
            ("server_seed_hash", &self.server_seed_hash),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyInput {
                    field: field.to_string(),
                }
                .into());
            }
        }

        let game: GameType = self.game.parse()?;
        Ok(GameRequest::from_options(game, &self.options)?)
    }
}

/// Recompute and check one outcome
pub fn verify_outcome(request: &VerificationRequest) -> VerifierResult<VerificationReport> {
    let game = request.prepare()?;
    let hash = HashVerification::new(&request.server_seed, &request.server_seed_hash);
    build_report(request, game, hash)
}

/// Same as [`verify_outcome`] with the digest and the decode run on the
/// blocking pool, off the async workers
pub async fn verify_outcome_async(
    request: &VerificationRequest,
) -> VerifierResult<VerificationReport> {
    let game = request.prepare()?;
    let hash = HashVerification::new_async(&request.server_seed, &request.server_seed_hash).await?;

    let seed = request.composite_seed().base();
    let decode_seed = seed.clone();
    let outcome = tokio::task::spawn_blocking(move || game.decode(&decode_seed))
        .await
        .map_err(|e| VerifierError::Task(e.to_string()))??;

    Ok(assemble_report(seed, game, hash, outcome))
}

/// Stand-alone commitment check
pub fn verify_hash(server_seed: &str, commitment: &str) -> VerifierResult<HashVerification> {
    if server_seed.is_empty() {
        return Err(ValidationError::EmptyInput {
            field: "server_seed".to_string(),
        }
        .into());
    }
    Ok(HashVerification::new(server_seed, commitment))
}

/// Verify each request independently; one failure does not stop the rest
pub fn verify_batch(requests: &[VerificationRequest]) -> BatchResult {
    requests.iter().map(verify_outcome).collect()
}

fn build_report(
    request: &VerificationRequest,
    game: GameRequest,
    hash: HashVerification,
) -> VerifierResult<VerificationReport> {
    let seed = request.composite_seed().base();
    let outcome = game.decode(&seed)?;
    Ok(assemble_report(seed, game, hash, outcome))
}

fn assemble_report(
    seed: String,
    game: GameRequest,
    hash: HashVerification,
    outcome: GameOutcome,
) -> VerificationReport {
    let display = render(&outcome, game.game_type());
    let hash_valid = hash.is_valid();

    tracing::info!(
        game = %game.game_type(),
        hash_valid,
        result = %outcome.result,
        "verified outcome"
    );

    VerificationReport {
        game: game.game_type(),
        seed,
        hash,
        hash_valid,
        outcome,
        display,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Nonce {
        Text(String),
        Number(u64),
    }

    Ok(match Nonce::deserialize(deserializer)? {
        Nonce::Text(text) => text,
        Nonce::Number(number) => number.to_string(),
    })
}
