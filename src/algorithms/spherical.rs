//! Great-circle translation on a unit sphere
//!
//! Latitude and longitude are radians. The new latitude comes from the
//! spherical law of cosines on the colatitudes; the longitude change is the
//! angle at the pole of the same spherical triangle. Every `acos` argument
//! is clamped to [-1, 1] because chained trig calls drift slightly outside
//! the domain.
//!
//! At a pole the longitude update divides by zero. [`PolePolicy`] decides
//! whether that is an error or the longitude is held.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::warn;

use crate::core::{Position, POLE_EPSILON};
use crate::validation::{TranslationError, TranslationResult};

/// What to do when the longitude update hits a pole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolePolicy {
    /// Fail with [`TranslationError::PoleSingularity`]
    #[default]
    Reject,
    /// Keep the previous longitude
    HoldLongitude,
}

/// Great-circle translator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreatCircle {
    pub pole_policy: PolePolicy,
}

impl GreatCircle {
    pub fn new(pole_policy: PolePolicy) -> Self {
        Self { pole_policy }
    }
}

/// `acos` with the argument clamped into its domain
fn clamped_acos(argument: f64, operation: &str) -> TranslationResult<f64> {
    if argument.is_nan() {
        return Err(TranslationError::numeric_domain(operation, argument));
    }
    Ok(argument.clamp(-1.0, 1.0).acos())
}

/// Update latitude using spherical trigonometry
pub fn update_latitude(old_latitude: f64, bearing: f64, distance: f64) -> TranslationResult<f64> {
    let old_colatitude = FRAC_PI_2 - old_latitude;
    let argument = old_colatitude.cos() * distance.cos()
        + old_colatitude.sin() * distance.sin() * bearing.cos();

    Ok(FRAC_PI_2 - clamped_acos(argument, "latitude update")?)
}

/// Update longitude from both latitudes, the bearing and the distance
pub fn update_longitude(
    old_latitude: f64,
    old_longitude: f64,
    new_latitude: f64,
    bearing: f64,
    distance: f64,
    pole_policy: PolePolicy,
) -> TranslationResult<f64> {
    // Due north or due south
    if bearing == 0.0 || bearing == PI {
        return Ok(old_longitude);
    }

    let easterly = if bearing > 0.0 { 1.0 } else { -1.0 };

    let old_colatitude = FRAC_PI_2 - old_latitude;
    let new_colatitude = FRAC_PI_2 - new_latitude;
    let denominator = new_colatitude.sin() * old_colatitude.sin();

    if denominator.abs() < POLE_EPSILON {
        let pole_latitude = if old_colatitude.sin().abs() < new_colatitude.sin().abs() {
            old_latitude
        } else {
            new_latitude
        };
        return match pole_policy {
            PolePolicy::Reject => Err(TranslationError::PoleSingularity { latitude: pole_latitude }),
            PolePolicy::HoldLongitude => {
                warn!(latitude = pole_latitude, "longitude undefined at pole, holding previous longitude");
                Ok(old_longitude)
            }
        };
    }

    let argument = (distance.cos() - new_colatitude.cos() * old_colatitude.cos()) / denominator;
    Ok(old_longitude + easterly * clamped_acos(argument, "longitude update")?)
}

/// Translate a position along a great circle
pub fn translate(
    position: Position,
    bearing: f64,
    distance: f64,
    pole_policy: PolePolicy,
) -> TranslationResult<Position> {
    let new_latitude = update_latitude(position.latitude, bearing, distance)?;
    let new_longitude = update_longitude(
        position.latitude,
        position.longitude,
        new_latitude,
        bearing,
        distance,
        pole_policy,
    )?;
    Ok(Position::new(new_latitude, new_longitude))
}

/// Central angle between two positions, in radians of arc
pub fn distance_between(from: &Position, to: &Position) -> f64 {
    let a = from.to_unit_vector();
    let b = to.to_unit_vector();
    a.cross(&b).norm().atan2(a.dot(&b))
}
