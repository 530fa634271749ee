//! Game registry and the options validation boundary
//!
//! `GameRequest` carries a game together with its already validated options.
//! Building one is the only way options reach a decoder, so nothing is drawn
//! for a request that fails validation.

use super::blackjack::{self, BlackjackOptions};
use super::dice;
use super::mines::{self, MinesOptions};
use super::plinko::{self, PlinkoOptions};
use super::roulette;
use super::types::{GameOutcome, GameType, OptionsSchema};
use crate::errors::{ValidationError, VerifierResult};
use serde_json::{Map, Value};

impl GameType {
    /// Options shape and ranges this game accepts
    pub fn schema(&self) -> OptionsSchema {
        match self {
            GameType::Plinko => PlinkoOptions::SCHEMA,
            GameType::Dice => OptionsSchema::NONE,
            GameType::Blackjack => BlackjackOptions::SCHEMA,
            GameType::Roulette => OptionsSchema::NONE,
            GameType::Mines => MinesOptions::SCHEMA,
        }
    }
}

/// A game ready to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameRequest {
    Plinko(PlinkoOptions),
    Dice,
    Blackjack(BlackjackOptions),
    Roulette,
    Mines(MinesOptions),
}

impl GameRequest {
    /// Validate raw JSON options for `game`.
    ///
    /// Option-less games accept `null` or `{}`. Every failure names the
    /// offending field.
    pub fn from_options(game: GameType, options: &Value) -> Result<Self, ValidationError> {
        let reader = OptionsReader::new(game.schema(), options)?;

        let request = match game {
            GameType::Plinko => GameRequest::Plinko(PlinkoOptions {
                rows: reader.read("rows")?,
            }),
            GameType::Dice => GameRequest::Dice,
            GameType::Blackjack => GameRequest::Blackjack(BlackjackOptions {
                cards: reader.read("cards")?,
            }),
            GameType::Roulette => GameRequest::Roulette,
            GameType::Mines => GameRequest::Mines(MinesOptions {
                size: reader.read("size")?,
                mines: reader.read("mines")?,
            }),
        };

        request.validate()?;
        Ok(request)
    }

    /// Re-check typed options; used when options are built in code
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            GameRequest::Plinko(options) => options.validate(),
            GameRequest::Blackjack(options) => options.validate(),
            GameRequest::Mines(options) => options.validate(),
            GameRequest::Dice | GameRequest::Roulette => Ok(()),
        }
    }

    pub fn game_type(&self) -> GameType {
        match self {
            GameRequest::Plinko(_) => GameType::Plinko,
            GameRequest::Dice => GameType::Dice,
            GameRequest::Blackjack(_) => GameType::Blackjack,
            GameRequest::Roulette => GameType::Roulette,
            GameRequest::Mines(_) => GameType::Mines,
        }
    }

    /// Options as JSON, `null` for option-less games
    pub fn options_json(&self) -> Value {
        let encoded = match self {
            GameRequest::Plinko(options) => serde_json::to_value(options),
            GameRequest::Blackjack(options) => serde_json::to_value(options),
            GameRequest::Mines(options) => serde_json::to_value(options),
            GameRequest::Dice | GameRequest::Roulette => Ok(Value::Null),
        };
        encoded.unwrap_or(Value::Null)
    }

    /// Run the matching decoder on the base seed
    pub fn decode(&self, seed: &str) -> VerifierResult<GameOutcome> {
        match self {
            GameRequest::Plinko(options) => plinko::process(seed, options),
            GameRequest::Dice => dice::process(seed),
            GameRequest::Blackjack(options) => blackjack::process(seed, options),
            GameRequest::Roulette => roulette::process(seed),
            GameRequest::Mines(options) => mines::process(seed, options),
        }
    }
}

/// Schema-driven reader over a JSON options object
struct OptionsReader<'a> {
    schema: OptionsSchema,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> OptionsReader<'a> {
    fn new(schema: OptionsSchema, options: &'a Value) -> Result<Self, ValidationError> {
        let fields = match options {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => return Err(ValidationError::NotAnObject),
        };

        if let Some(map) = fields {
            if let Some(unknown) = map.keys().find(|key| schema.field(key).is_none()) {
                return Err(ValidationError::UnexpectedField {
                    field: unknown.clone(),
                });
            }
        }

        Ok(Self { schema, fields })
    }

    fn read(&self, name: &str) -> Result<u32, ValidationError> {
        let missing = || ValidationError::MissingField {
            field: name.to_string(),
        };
        let field = self.schema.field(name).ok_or_else(missing)?;
        let value = self
            .fields
            .and_then(|map| map.get(name))
            .filter(|value| !value.is_null())
            .ok_or_else(missing)?;

        match (value.as_i64(), value.as_u64()) {
            (Some(number), _) => field.check(number),
            // above i64::MAX: an integer, just far too large
            (None, Some(_)) => Err(ValidationError::OutOfRange {
                field: name.to_string(),
                value: i64::MAX,
                min: field.min,
                max: field.max,
            }),
            (None, None) => Err(ValidationError::InvalidType {
                field: name.to_string(),
                expected: "an integer".to_string(),
            }),
        }
    }
}
