//! Error types for translation and route input

pub mod error;

pub use error::{LegParseError, TranslationError, TranslationResult};
