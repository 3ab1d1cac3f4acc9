//! Position translation algorithms

pub mod flat;
pub mod spherical;
pub mod strategy;

pub use flat::FlatPlane;
pub use spherical::{GreatCircle, PolePolicy};
pub use strategy::{Geometry, PositionTranslator, TranslationStrategy};
