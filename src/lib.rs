//! fairverify - provably fair outcome verification
//!
//! Recomputes the outcome of a seeded game from the disclosed server seed,
//! client seed and nonce, and checks the revealed server seed against the
//! SHA-256 commitment published before play.
//!
//! ```no_run
//! use fairverify::{verify_outcome, VerificationRequest};
//!
//! let request: VerificationRequest = serde_json::from_str(r#"{
//!     "server_seed": "529b778e19d71a10d5d76b86",
//!     "client_seed": "placeholder",
//!     "nonce": "38",
//!     "server_seed_hash": "...",
//!     "game": "mines",
//!     "options": {"size": 5, "mines": 5}
//! }"#)?;
//! let report = verify_outcome(&request)?;
//! println!("{}", report.display);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod games;
pub mod hash;
pub mod logging;
pub mod rng;
pub mod seed;
pub mod verification;

pub use config::{ConfigLoader, VerifierConfig};
pub use errors::{VerifierError, VerifierResult};
pub use games::{GameOutcome, GameOutcomeStep, GameRequest, GameType};
pub use hash::HashVerification;
pub use seed::CompositeSeed;
pub use verification::{
    verify_batch, verify_hash, verify_outcome, verify_outcome_async, VerificationReport,
    VerificationRequest,
};
