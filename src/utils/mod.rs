//! Configuration loading and validation

pub mod config;

pub use config::{AngleUnit, ConfigError, ConfigurationManager, DistanceUnit, NavigatorConfig};
