//! Mines: sampling without replacement over a square board
//!
//! One stream keyed by the unsuffixed base seed supplies every draw. Each
//! draw picks an index into the cells still free, so the board layout
//! depends on the order of draws as well as their values.

use super::types::{GameOutcome, GameOutcomeStep, OptionField, OptionsSchema};
use crate::errors::{DecodeError, ValidationError, VerifierResult};
use crate::rng::SeededStream;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinesOptions {
    /// Cells per side
    pub size: u32,
    /// Mines to place
    pub mines: u32,
}

impl MinesOptions {
    pub const SCHEMA: OptionsSchema = OptionsSchema {
        fields: &[
            OptionField {
                name: "size",
                description: "Grid size (cells per side)",
                min: 3,
                max: Some(10),
            },
            OptionField {
                name: "mines",
                description: "Number of mines",
                min: 1,
                max: Some(25),
            },
        ],
    };

    pub fn new(size: u32, mines: u32) -> Self {
        Self { size, mines }
    }

    pub fn cells(&self) -> u32 {
        self.size * self.size
    }

    /// Schema ranges plus the board capacity the ranges alone do not cover
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::SCHEMA.check("size", self.size)?;
        Self::SCHEMA.check("mines", self.mines)?;

        if self.mines > self.cells() {
            return Err(ValidationError::TooManyMines {
                mines: self.mines,
                cells: self.cells(),
            });
        }
        Ok(())
    }
}

pub fn process(seed: &str, options: &MinesOptions) -> VerifierResult<GameOutcome> {
    let size = options.size as usize;
    let cells = size * size;

    if options.mines as usize > cells {
        return Err(DecodeError::BoardExhausted {
            mines: options.mines,
            cells: cells as u32,
        }
        .into());
    }

    let mut grid = vec![vec![0u8; size]; size];
    let mut remaining: Vec<usize> = (0..cells).collect();
    let mut stream = SeededStream::new(seed);
    let mut steps = Vec::with_capacity(options.mines as usize);

    for _ in 0..options.mines {
        let raw = stream.next_f64();
        let pick = (raw * remaining.len() as f64).floor() as usize;
        let tile = remaining.remove(pick);

        let x = tile % size;
        let y = tile / size;
        grid[y][x] = 1;

        steps.push(
            GameOutcomeStep::new("Mine", raw)
                .with_metadata("x", x)
                .with_metadata("y", y),
        );
    }

    let result: String = grid
        .iter()
        .flatten()
        .map(|cell| char::from(b'0' + cell))
        .collect();

    tracing::debug!(seed, size, mines = options.mines, %result, "decoded mines board");

    let mut outcome = GameOutcome::multi_draw(seed, result, steps)
        .with_metadata("size", options.size)
        .with_metadata("mines", options.mines);
    outcome.grid = Some(grid);
    Ok(outcome)
}
