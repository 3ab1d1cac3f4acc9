//! Turtle Universal
//!
//! Tracks a "turtle" as it is moved by bearing and distance, under either a
//! flat-plane approximation or great-circle travel on a unit sphere.

pub mod core;
pub mod algorithms;
pub mod navigation;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{Position, NAUTICAL_MILES_PER_DEGREE};
pub use algorithms::{FlatPlane, Geometry, GreatCircle, PolePolicy, PositionTranslator, TranslationStrategy};
pub use navigation::{Leg, Navigator, WaypointLog};
pub use validation::{TranslationError, TranslationResult};
pub use utils::{AngleUnit, ConfigError, ConfigurationManager, DistanceUnit, NavigatorConfig};
pub use api::{CsvFormatter, FormattedTrack, JsonFormatter, OutputFormat, TextFormatter, TrackFormatter};
