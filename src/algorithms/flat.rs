//! Flat-plane translation
//!
//! Treats latitude and longitude as orthogonal planar axes. A move adds the
//! displacement `distance * (sin(bearing), cos(bearing))` to the position
//! vector, so it is defined for every finite input.

use nalgebra::Vector2;

use crate::core::Position;

/// Planar displacement vector for a bearing and distance, latitude first
pub fn displacement(bearing: f64, distance: f64) -> Vector2<f64> {
    let (sin_b, cos_b) = bearing.sin_cos();
    Vector2::new(sin_b, cos_b) * distance
}

/// Update latitude from the previous latitude, bearing and distance
pub fn update_latitude(old_latitude: f64, bearing: f64, distance: f64) -> f64 {
    old_latitude + distance * bearing.sin()
}

/// Update longitude from the previous longitude, bearing and distance
pub fn update_longitude(old_longitude: f64, bearing: f64, distance: f64) -> f64 {
    old_longitude + distance * bearing.cos()
}

/// Translate a position across the plane
pub fn translate(position: Position, bearing: f64, distance: f64) -> Position {
    Position::from_vector2(&(position.to_vector2() + displacement(bearing, distance)))
}

/// Euclidean distance between two planar positions
pub fn distance_between(from: &Position, to: &Position) -> f64 {
    (to.to_vector2() - from.to_vector2()).norm()
}

/// Flat-plane translator; stateless
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatPlane;
