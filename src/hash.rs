//! Server seed commitments
//!
//! A commitment is the lowercase hex SHA-256 of the server seed's UTF-8
//! bytes, published before play and checked once the seed is revealed.

use crate::errors::{VerifierError, VerifierResult};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Hex length of a SHA-256 digest
pub const DIGEST_HEX_LEN: usize = 64;

/// Bytes of entropy in a generated server seed
pub const SERVER_SEED_BYTES: usize = 12;

/// Fresh random server seed as hex, for producing test commitments
pub fn generate_server_seed() -> String {
    let mut bytes = [0u8; SERVER_SEED_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Lowercase hex SHA-256 of `server_seed`
pub fn digest(server_seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(server_seed.as_bytes());
    let hash = hex::encode(hasher.finalize());

    tracing::debug!(hash = %hash, "computed server seed digest");
    hash
}

/// Digest on the blocking pool. A failed task is terminal and not retried.
pub async fn digest_async(server_seed: &str) -> VerifierResult<String> {
    let seed = server_seed.to_string();
    tokio::task::spawn_blocking(move || digest(&seed))
        .await
        .map_err(|e| VerifierError::Hash(e.to_string()))
}

/// Computed digest of the revealed seed next to the published commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashVerification {
    pub expected_hash: String,
    pub received_hash: String,
}

impl HashVerification {
    pub fn new(server_seed: &str, commitment: &str) -> Self {
        Self::from_digest(digest(server_seed), commitment)
    }

    /// Pair an already computed digest with a commitment
    pub fn from_digest(expected_hash: String, commitment: &str) -> Self {
        Self {
            expected_hash,
            received_hash: commitment.to_string(),
        }
    }

    pub async fn new_async(server_seed: &str, commitment: &str) -> VerifierResult<Self> {
        Ok(Self::from_digest(digest_async(server_seed).await?, commitment))
    }

    /// Case-insensitive; whitespace around the commitment is ignored
    pub fn is_valid(&self) -> bool {
        self.expected_hash
            .eq_ignore_ascii_case(self.received_hash.trim())
    }
}
