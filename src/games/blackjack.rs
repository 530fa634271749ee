//! Blackjack: one fresh stream per card
//!
//! A draw maps to a card index with `round(r * 51)`. Since `r < 1` the index
//! never exceeds 51; ids 0 and 51 receive half the weight of the others.
//! The mapping is kept exactly as deployed so committed games still verify.

use super::types::{GameOutcome, GameOutcomeStep, OptionField, OptionsSchema};
use crate::errors::{DecodeError, ValidationError, VerifierResult};
use crate::rng;
use crate::seed::round_seed;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];
pub const SUITS: [&str; 4] = ["(Clubs)", "(Diamonds)", "(Hearts)", "(Spades)"];

/// Most cards one request may ask for; draws are with replacement, so this
/// is a size bound rather than the deck size
pub const MAX_CARDS: u32 = 52;

/// Highest index the draw is scaled onto
const INDEX_SCALE: f64 = 51.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackOptions {
    pub cards: u32,
}

impl BlackjackOptions {
    pub const SCHEMA: OptionsSchema = OptionsSchema {
        fields: &[OptionField {
            name: "cards",
            description: "Number of cards",
            min: 1,
            max: Some(MAX_CARDS),
        }],
    };

    pub fn new(cards: u32) -> Self {
        Self { cards }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::SCHEMA.check("cards", self.cards)?;
        Ok(())
    }
}

/// A card identified by its index in rank-major order within each suit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    index: u32,
}

impl Card {
    pub fn from_index(index: u32) -> Result<Self, DecodeError> {
        if index as usize >= RANKS.len() * SUITS.len() {
            return Err(DecodeError::CardIndexOutOfRange { index });
        }
        Ok(Self { index })
    }

    /// Card selected by a draw in `[0, 1)`
    pub fn from_draw(raw: f64) -> Result<Self, DecodeError> {
        Self::from_index((raw * INDEX_SCALE).round() as u32)
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn rank(&self) -> &'static str {
        RANKS[self.index as usize % RANKS.len()]
    }

    pub fn suit(&self) -> &'static str {
        SUITS[self.index as usize / RANKS.len()]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank(), self.suit())
    }
}

pub fn process(seed: &str, options: &BlackjackOptions) -> VerifierResult<GameOutcome> {
    let mut cards = Vec::new();
    let mut steps = Vec::new();

    for round in 1..=options.cards {
        let card_seed = round_seed(seed, round);
        let raw = rng::draw(&card_seed);
        let card = Card::from_draw(raw)?;

        steps.push(
            GameOutcomeStep::new("Card", raw)
                .with_seed(card_seed)
                .with_metadata("card", card.to_string())
                .with_metadata("index", card.index()),
        );
        cards.push(card.to_string());
    }

    let result = cards.join(", ");
    tracing::debug!(seed, cards = options.cards, %result, "decoded blackjack cards");

    Ok(GameOutcome::multi_draw(seed, result, steps).with_metadata("cards", options.cards))
}
