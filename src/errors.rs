//! Error types for the fairverify verifier
//!
//! A root error wraps the domain errors so callers can match on the
//! category they care about and still use `?` everywhere.

use thiserror::Error;

/// Root error type for all verifier operations
#[derive(Debug, Error)]
pub enum VerifierError {
    /// Options or request fields rejected before any draw
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Dispatch on a game identifier that is not registered
    #[error("No such game: '{0}'")]
    UnknownGame(String),

    /// A decoder could not map its draws onto a game result
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Digest computation failed; terminal, never retried
    #[error("Hash computation failed: {0}")]
    Hash(String),

    /// A blocking decode task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(String),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Options and request validation errors. Every variant names its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' is required and cannot be empty")]
    EmptyInput { field: String },

    #[error("Field '{field}' must be {expected}")]
    InvalidType { field: String, expected: String },

    #[error("Field '{field}' out of range: {value} (allowed {min}..={})", display_max(.max))]
    OutOfRange {
        field: String,
        value: i64,
        min: u32,
        max: Option<u32>,
    },

    #[error("Unexpected field: {field}")]
    UnexpectedField { field: String },

    #[error("Field 'mines' exceeds board capacity: {mines} mines on {cells} cells")]
    TooManyMines { mines: u32, cells: u32 },

    #[error("Options must be a JSON object")]
    NotAnObject,
}

fn display_max(max: &Option<u32>) -> String {
    max.map(|m| m.to_string()).unwrap_or_else(|| "∞".to_string())
}

impl ValidationError {
    /// Name of the offending field, when the failure is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::EmptyInput { field }
            | ValidationError::InvalidType { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::UnexpectedField { field } => Some(field),
            ValidationError::TooManyMines { .. } => Some("mines"),
            ValidationError::NotAnObject => None,
        }
    }
}

/// Errors raised while turning draws into a game result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Card index {index} is outside the 52-card deck")]
    CardIndexOutOfRange { index: u32 },

    #[error("Cannot place {mines} mines on a board of {cells} cells")]
    BoardExhausted { mines: u32, cells: u32 },
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {0}")]
    MissingRequired(String),
}

// Convenience type alias for Results
pub type VerifierResult<T> = Result<T, VerifierError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display() {
        let error: VerifierError = ValidationError::MissingField {
            field: "size".to_string(),
        }
        .into();

        assert!(error.to_string().contains("Validation error"));
        assert!(error.to_string().contains("size"));
    }

    #[test]
    fn test_out_of_range_details() {
        let bounded = ValidationError::OutOfRange {
            field: "rows".to_string(),
            value: 11,
            min: 1,
            max: Some(10),
        };
        assert_eq!(
            bounded.to_string(),
            "Field 'rows' out of range: 11 (allowed 1..=10)"
        );

        let unbounded = ValidationError::OutOfRange {
            field: "cards".to_string(),
            value: 0,
            min: 1,
            max: None,
        };
        assert!(unbounded.to_string().contains("1..=∞"));
    }

    #[test]
    fn test_field_names() {
        let error = ValidationError::TooManyMines { mines: 12, cells: 9 };
        assert_eq!(error.field(), Some("mines"));
        assert_eq!(ValidationError::NotAnObject.field(), None);
    }

    #[test]
    fn test_unknown_game_message() {
        let error = VerifierError::UnknownGame("keno".to_string());
        assert_eq!(error.to_string(), "No such game: 'keno'");
    }

    #[test]
    fn test_error_source() {
        let error: VerifierError = DecodeError::CardIndexOutOfRange { index: 52 }.into();
        assert!(error.source().is_some());
    }
}
