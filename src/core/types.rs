//! Core data types for turtle navigation

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in either geometry.
///
/// Spherical navigators read the fields as radians on a unit sphere, flat
/// navigators as planar units. Positions are never mutated once recorded;
/// every move produces a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// The (0, 0) starting point
    pub fn origin() -> Self {
        Self::default()
    }

    /// Build a position from degrees, storing radians
    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg.to_radians(), longitude_deg.to_radians())
    }

    /// (latitude, longitude) in degrees
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.latitude.to_degrees(), self.longitude.to_degrees())
    }

    /// Planar vector with latitude as the first component
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.latitude, self.longitude)
    }

    pub fn from_vector2(v: &Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Unit vector on the sphere, treating latitude and longitude as radians
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Position {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Position> for (f64, f64) {
    fn from(p: Position) -> Self {
        (p.latitude, p.longitude)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
