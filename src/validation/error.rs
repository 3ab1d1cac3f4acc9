use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of a single position translation
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum TranslationError {
    /// An `acos` argument was not a number, even after clamping to [-1, 1]
    #[error("numeric domain error in {operation}: acos argument {value}")]
    NumericDomain {
        operation: String,
        value: f64,
    },
    /// Longitude update at a pole divides by zero
    #[error("pole singularity at latitude {latitude:.9} rad: longitude is undefined")]
    PoleSingularity {
        latitude: f64,
    },
}

impl TranslationError {
    pub fn numeric_domain(operation: &str, value: f64) -> Self {
        TranslationError::NumericDomain {
            operation: operation.to_string(),
            value,
        }
    }

    /// Whether a caller could recover by choosing a different pole policy
    pub fn is_pole_singularity(&self) -> bool {
        matches!(self, TranslationError::PoleSingularity { .. })
    }
}

/// Result type for translation operations
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Errors parsing a `bearing:distance` leg
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegParseError {
    #[error("expected 'bearing:distance', got '{input}'")]
    MissingSeparator { input: String },
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
