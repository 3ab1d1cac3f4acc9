//! Route legs given as `bearing:distance`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::LegParseError;

/// One bearing and distance instruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub bearing: f64,
    pub distance: f64,
}

impl Leg {
    pub fn new(bearing: f64, distance: f64) -> Self {
        Self { bearing, distance }
    }

    /// Rescale a leg entered in other units; `angle` applies to the bearing
    pub fn scaled(self, angle: impl Fn(f64) -> f64, distance: impl Fn(f64) -> f64) -> Self {
        Self::new(angle(self.bearing), distance(self.distance))
    }
}

impl FromStr for Leg {
    type Err = LegParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (bearing, distance) = s
            .split_once(':')
            .ok_or_else(|| LegParseError::MissingSeparator { input: s.to_string() })?;

        let bearing = bearing.trim();
        let distance = distance.trim();

        let bearing = bearing.parse::<f64>().map_err(|_| LegParseError::InvalidNumber {
            field: "bearing",
            value: bearing.to_string(),
        })?;
        let distance = distance.parse::<f64>().map_err(|_| LegParseError::InvalidNumber {
            field: "distance",
            value: distance.to_string(),
        })?;

        Ok(Self::new(bearing, distance))
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bearing, self.distance)
    }
}
