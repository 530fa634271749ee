//! Plinko: one fresh stream per row, left below one half

use super::types::{GameOutcome, GameOutcomeStep, OptionField, OptionsSchema};
use crate::errors::{ValidationError, VerifierResult};
use crate::rng;
use crate::seed::round_seed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlinkoOptions {
    pub rows: u32,
}

impl PlinkoOptions {
    pub const SCHEMA: OptionsSchema = OptionsSchema {
        fields: &[OptionField {
            name: "rows",
            description: "Number of rows",
            min: 1,
            max: Some(10),
        }],
    };

    pub fn new(rows: u32) -> Self {
        Self { rows }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::SCHEMA.check("rows", self.rows)?;
        Ok(())
    }
}

/// Direction the ball takes for a draw
pub fn direction(raw: f64) -> char {
    if raw < 0.5 {
        'L'
    } else {
        'R'
    }
}

pub fn process(seed: &str, options: &PlinkoOptions) -> VerifierResult<GameOutcome> {
    let mut path = String::with_capacity(options.rows as usize);
    let mut steps = Vec::with_capacity(options.rows as usize);

    for row in 1..=options.rows {
        let row_seed = round_seed(seed, row);
        let raw = rng::draw(&row_seed);
        let dir = direction(raw);
        path.push(dir);

        steps.push(
            GameOutcomeStep::new("Row", raw)
                .with_seed(row_seed)
                .with_metadata("direction", dir.to_string()),
        );
    }

    tracing::debug!(seed, rows = options.rows, %path, "decoded plinko path");

    Ok(GameOutcome::multi_draw(seed, path, steps).with_metadata("rows", options.rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        // 16 rows is beyond the published range; the decoder itself does not care
        let outcome = process(
            "529b778e19d71a10d5d76b86:placeholder:69",
            &PlinkoOptions::new(16),
        )
        .unwrap();
        assert_eq!(outcome.result, "LRLLRLRLLRRLRRRL");
        assert_eq!(outcome.steps.len(), 16);
    }

    #[test]
    fn test_rows_reseed() {
        let outcome = process("s:c:5", &PlinkoOptions::new(3)).unwrap();
        let seeds: Vec<&str> = outcome
            .steps
            .iter()
            .map(|step| step.seed.as_deref().unwrap())
            .collect();
        assert_eq!(seeds, vec!["s:c:5:1", "s:c:5:2", "s:c:5:3"]);

        for step in &outcome.steps {
            assert_eq!(step.raw, rng::draw(step.seed.as_deref().unwrap()));
        }
    }

    #[test]
    fn test_prefix_stability() {
        // the first rows do not depend on how many rows follow
        let short = process("s:c:9", &PlinkoOptions::new(4)).unwrap();
        let long = process("s:c:9", &PlinkoOptions::new(10)).unwrap();
        assert!(long.result.starts_with(&short.result));
    }

    #[test]
    fn test_length_and_alphabet() {
        for rows in 1..=10 {
            let outcome = process("server:client:3", &PlinkoOptions::new(rows)).unwrap();
            assert_eq!(outcome.result.len() as u32, rows);
            assert!(outcome.result.chars().all(|c| c == 'L' || c == 'R'));
        }
    }

    #[test]
    fn test_direction_threshold() {
        assert_eq!(direction(0.0), 'L');
        assert_eq!(direction(0.4999), 'L');
        assert_eq!(direction(0.5), 'R');
    }

    #[test]
    fn test_validate() {
        assert!(PlinkoOptions::new(1).validate().is_ok());
        assert!(PlinkoOptions::new(10).validate().is_ok());
        assert!(PlinkoOptions::new(0).validate().is_err());
        assert!(PlinkoOptions::new(16).validate().is_err());
    }
}
