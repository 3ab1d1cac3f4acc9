//! Strategy selection for position translation
//!
//! [`PositionTranslator`] is the uniform call contract. The two built-in
//! geometries implement it directly and through [`TranslationStrategy`],
//! which is what navigators hold so the model can be picked at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::algorithms::{flat, spherical};
use crate::algorithms::{FlatPlane, GreatCircle, PolePolicy};
use crate::core::Position;
use crate::validation::TranslationResult;

/// Maps (position, bearing, distance) to the next position
pub trait PositionTranslator {
    fn translate(&self, position: Position, bearing: f64, distance: f64) -> TranslationResult<Position>;

    /// Length of the leg between two positions in this geometry's units
    fn distance_between(&self, from: &Position, to: &Position) -> f64;

    fn geometry(&self) -> Geometry;
}

impl PositionTranslator for FlatPlane {
    fn translate(&self, position: Position, bearing: f64, distance: f64) -> TranslationResult<Position> {
        Ok(flat::translate(position, bearing, distance))
    }

    fn distance_between(&self, from: &Position, to: &Position) -> f64 {
        flat::distance_between(from, to)
    }

    fn geometry(&self) -> Geometry {
        Geometry::FlatPlane
    }
}

impl PositionTranslator for GreatCircle {
    fn translate(&self, position: Position, bearing: f64, distance: f64) -> TranslationResult<Position> {
        spherical::translate(position, bearing, distance, self.pole_policy)
    }

    fn distance_between(&self, from: &Position, to: &Position) -> f64 {
        spherical::distance_between(from, to)
    }

    fn geometry(&self) -> Geometry {
        Geometry::GreatCircle
    }
}

/// Which geometric model a navigator uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geometry {
    FlatPlane,
    GreatCircle,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::FlatPlane => write!(f, "flat_plane"),
            Geometry::GreatCircle => write!(f, "great_circle"),
        }
    }
}

impl FromStr for Geometry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat_plane" | "flat" | "cartesian" => Ok(Geometry::FlatPlane),
            "great_circle" | "spherical" => Ok(Geometry::GreatCircle),
            other => Err(format!("unknown geometry '{}'", other)),
        }
    }
}

/// A translator chosen at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStrategy {
    FlatPlane(FlatPlane),
    GreatCircle(GreatCircle),
}

impl TranslationStrategy {
    pub fn flat_plane() -> Self {
        TranslationStrategy::FlatPlane(FlatPlane)
    }

    pub fn great_circle(pole_policy: PolePolicy) -> Self {
        TranslationStrategy::GreatCircle(GreatCircle::new(pole_policy))
    }

    /// Build the strategy for a geometry; the pole policy only affects great circles
    pub fn for_geometry(geometry: Geometry, pole_policy: PolePolicy) -> Self {
        match geometry {
            Geometry::FlatPlane => Self::flat_plane(),
            Geometry::GreatCircle => Self::great_circle(pole_policy),
        }
    }
}

impl Default for TranslationStrategy {
    fn default() -> Self {
        Self::flat_plane()
    }
}

impl PositionTranslator for TranslationStrategy {
    fn translate(&self, position: Position, bearing: f64, distance: f64) -> TranslationResult<Position> {
        match self {
            TranslationStrategy::FlatPlane(t) => t.translate(position, bearing, distance),
            TranslationStrategy::GreatCircle(t) => t.translate(position, bearing, distance),
        }
    }

    fn distance_between(&self, from: &Position, to: &Position) -> f64 {
        match self {
            TranslationStrategy::FlatPlane(t) => t.distance_between(from, to),
            TranslationStrategy::GreatCircle(t) => t.distance_between(from, to),
        }
    }

    fn geometry(&self) -> Geometry {
        match self {
            TranslationStrategy::FlatPlane(t) => t.geometry(),
            TranslationStrategy::GreatCircle(t) => t.geometry(),
        }
    }
}
