//! Core types and constants for turtle navigation

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
