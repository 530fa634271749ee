//! Dice: one draw scaled onto `0..=9999`

use super::types::GameOutcome;
use crate::errors::VerifierResult;
use crate::rng;

/// Number of distinct dice results
pub const DICE_RANGE: u32 = 10_000;

/// Decode a dice roll from the base seed.
///
/// The result is rendered without zero padding, so rolls under 1000 have
/// fewer than four digits.
pub fn process(seed: &str) -> VerifierResult<GameOutcome> {
    let raw = rng::draw(seed);
    let roll = (raw * DICE_RANGE as f64).floor() as u32;

    tracing::debug!(seed, raw, roll, "decoded dice roll");

    Ok(GameOutcome::single_draw(seed, roll.to_string(), raw))
}
