//! Navigation constants and unit conversions

use std::f64::consts::{PI, TAU};

/// One minute of arc along a great circle is one nautical mile
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;

/// Below this magnitude the spherical longitude denominator is treated as zero
pub const POLE_EPSILON: f64 = 1e-12;

/// Convert a great-circle distance in nautical miles to radians of arc
pub fn nautical_miles_to_radians(nautical_miles: f64) -> f64 {
    (nautical_miles / NAUTICAL_MILES_PER_DEGREE).to_radians()
}

/// Convert radians of arc to nautical miles
pub fn radians_to_nautical_miles(radians: f64) -> f64 {
    radians.to_degrees() * NAUTICAL_MILES_PER_DEGREE
}

/// Map a bearing in radians into (-π, π]; bearings already in range are returned as is
pub fn normalize_bearing(bearing: f64) -> f64 {
    if bearing > -PI && bearing <= PI {
        return bearing;
    }
    let wrapped = bearing.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
