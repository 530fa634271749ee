//! Roulette: one draw onto a single-zero wheel

use super::types::GameOutcome;
use crate::errors::VerifierResult;
use crate::rng;

/// Pockets on a single-zero (European) wheel: 0 through 36
pub const POCKETS: u32 = 37;

pub fn process(seed: &str) -> VerifierResult<GameOutcome> {
    let raw = rng::draw(seed);
    let pocket = (raw * POCKETS as f64).floor() as u32;

    tracing::debug!(seed, raw, pocket, "decoded roulette spin");

    Ok(GameOutcome::single_draw(seed, pocket.to_string(), raw).with_metadata("pockets", POCKETS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let outcome = process("2c10efdd7a86356478fe8774:placeholder:212").unwrap();
        assert_eq!(outcome.result, "27");
        assert_eq!(outcome.metadata["pockets"], 37);
    }

    #[test]
    fn test_every_pocket_reachable() {
        let mut seen = [false; POCKETS as usize];
        for nonce in 0..2_000 {
            let seed = format!("wheel:client:{}", nonce);
            let pocket: usize = process(&seed).unwrap().result.parse().unwrap();
            seen[pocket] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
