use crate::errors::{ValidationError, VerifierError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Key/value annotations on outcomes and steps (string, number, bool or null)
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Supported game types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Plinko,
    Dice,
    Blackjack,
    Roulette,
    Mines,
}

impl GameType {
    /// Every registered game, in listing order
    pub const ALL: [GameType; 5] = [
        GameType::Plinko,
        GameType::Dice,
        GameType::Blackjack,
        GameType::Roulette,
        GameType::Mines,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            GameType::Plinko => "plinko",
            GameType::Dice => "dice",
            GameType::Blackjack => "blackjack",
            GameType::Roulette => "roulette",
            GameType::Mines => "mines",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GameType {
    type Err = VerifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        GameType::ALL
            .into_iter()
            .find(|game| game.id() == id)
            .ok_or_else(|| VerifierError::UnknownGame(s.to_string()))
    }
}

/// One audit record, produced in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcomeStep {
    pub title: String,
    pub raw: f64,
    /// Seed the draw was taken from, when it differs from the base seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl GameOutcomeStep {
    pub fn new(title: impl Into<String>, raw: f64) -> Self {
        Self {
            title: title.into(),
            raw,
            seed: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Decoder output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Canonical, human-readable result used for equality checks
    pub result: String,
    /// Base seed the outcome was derived from
    pub seed: String,
    /// The single draw of single-draw games
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<GameOutcomeStep>,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Mines board, row-major
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<Vec<u8>>>,
}

impl GameOutcome {
    /// Outcome of a game decided by one draw
    pub fn single_draw(seed: &str, result: impl Into<String>, raw: f64) -> Self {
        Self {
            result: result.into(),
            seed: seed.to_string(),
            raw: Some(raw),
            steps: Vec::new(),
            metadata: Metadata::new(),
            grid: None,
        }
    }

    /// Outcome of a game built from an ordered list of draws
    pub fn multi_draw(seed: &str, result: impl Into<String>, steps: Vec<GameOutcomeStep>) -> Self {
        Self {
            result: result.into(),
            seed: seed.to_string(),
            raw: None,
            steps,
            metadata: Metadata::new(),
            grid: None,
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// One integer option a game accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionField {
    pub name: &'static str,
    pub description: &'static str,
    pub min: u32,
    /// `None` means unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl OptionField {
    /// Range-check a value against this field
    pub fn check(&self, value: i64) -> Result<u32, ValidationError> {
        let out_of_range = || ValidationError::OutOfRange {
            field: self.name.to_string(),
            value,
            min: self.min,
            max: self.max,
        };

        let checked = u32::try_from(value).map_err(|_| out_of_range())?;
        let above_max = self.max.map_or(false, |max| checked > max);
        if checked < self.min || above_max {
            return Err(out_of_range());
        }
        Ok(checked)
    }
}

/// Published options shape of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionsSchema {
    pub fields: &'static [OptionField],
}

impl OptionsSchema {
    pub const NONE: OptionsSchema = OptionsSchema { fields: &[] };

    pub fn field(&self, name: &str) -> Option<&OptionField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Range-check `value` against the named field of this schema
    pub fn check(&self, name: &str, value: u32) -> Result<u32, ValidationError> {
        match self.field(name) {
            Some(field) => field.check(value as i64),
            None => Err(ValidationError::UnexpectedField {
                field: name.to_string(),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
