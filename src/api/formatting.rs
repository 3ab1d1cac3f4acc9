//! Waypoint track formatting and serialization
//!
//! A [`TrackFormatter`] turns a waypoint log into a [`FormattedTrack`] in the
//! caller's units; the text, JSON and CSV formatters render that.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::algorithms::{Geometry, PositionTranslator};
use crate::navigation::{Navigator, WaypointLog};
use crate::utils::{AngleUnit, DistanceUnit};

/// Rendering selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// One waypoint in output units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointRecord {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    /// Length of the leg that reached this waypoint; zero for the seed
    pub leg_distance: f64,
}

/// Formatted travel history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTrack {
    pub geometry: Geometry,
    /// Units of `latitude`/`longitude`; `None` for planar units
    pub angle_unit: Option<AngleUnit>,
    pub distance_unit: DistanceUnit,
    pub waypoints: Vec<WaypointRecord>,
    pub total_distance: f64,
}

/// Converts a log into output units
#[derive(Debug, Clone)]
pub struct TrackFormatter {
    /// Units for spherical coordinates
    pub angle_unit: AngleUnit,
    pub distance_unit: DistanceUnit,
    /// Decimal places kept
    pub precision: u8,
}

impl Default for TrackFormatter {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
            distance_unit: DistanceUnit::Native,
            precision: 6,
        }
    }
}

impl TrackFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }

    pub fn with_distance_unit(mut self, distance_unit: DistanceUnit) -> Self {
        self.distance_unit = distance_unit;
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn format_navigator(&self, navigator: &Navigator) -> FormattedTrack {
        self.format(navigator.log(), navigator.strategy())
    }

    /// Format a log, measuring legs with `translator`
    pub fn format<T>(&self, log: &WaypointLog, translator: &T) -> FormattedTrack
    where
        T: PositionTranslator + ?Sized,
    {
        let geometry = translator.geometry();
        // Planar coordinates have no angle unit to convert
        let angle_unit = match geometry {
            Geometry::GreatCircle => Some(self.angle_unit),
            Geometry::FlatPlane => None,
        };
        let coordinate = |v: f64| angle_unit.map_or(v, |u| u.radians_to_unit(v));

        let mut waypoints = Vec::with_capacity(log.len());
        let mut previous = None;
        for (index, position) in log.waypoints().iter().enumerate() {
            let leg = previous.map_or(0.0, |p| translator.distance_between(p, position));
            waypoints.push(WaypointRecord {
                index,
                latitude: self.round_to_precision(coordinate(position.latitude)),
                longitude: self.round_to_precision(coordinate(position.longitude)),
                leg_distance: self.round_to_precision(self.distance_unit.native_to_unit(leg)),
            });
            previous = Some(position);
        }

        FormattedTrack {
            geometry,
            angle_unit,
            distance_unit: self.distance_unit,
            waypoints,
            total_distance: self.round_to_precision(
                self.distance_unit.native_to_unit(log.total_distance(translator)),
            ),
        }
    }

    fn round_to_precision(&self, value: f64) -> f64 {
        let multiplier = 10_f64.powi(self.precision as i32);
        (value * multiplier).round() / multiplier
    }
}

/// Human-readable text formatter
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// One line per waypoint without the header and summary
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    pub fn format_text(&self, track: &FormattedTrack) -> String {
        let unit = match track.angle_unit {
            Some(AngleUnit::Degrees) => "°",
            Some(AngleUnit::Radians) => " rad",
            None => "",
        };
        let distance_unit = match track.distance_unit {
            DistanceUnit::NauticalMiles => " nm",
            DistanceUnit::Native => "",
        };

        let mut output = String::new();
        if !self.compact {
            output.push_str(&format!("Track ({}, {} waypoints):\n", track.geometry, track.waypoints.len()));
        }
        for wp in &track.waypoints {
            if self.compact {
                output.push_str(&format!("{} {} {}\n", wp.index, wp.latitude, wp.longitude));
            } else {
                output.push_str(&format!(
                    "  #{:<3} lat {}{}, lon {}{}  (+{}{})\n",
                    wp.index, wp.latitude, unit, wp.longitude, unit, wp.leg_distance, distance_unit
                ));
            }
        }
        if !self.compact {
            output.push_str(&format!("Total distance: {}{}\n", track.total_distance, distance_unit));
        }
        output
    }
}

/// JSON formatter for structured output
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, track: &FormattedTrack) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(track)
        } else {
            serde_json::to_string(track)
        }
    }
}

/// CSV formatter, one row per waypoint
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "index,latitude,longitude,leg_distance".to_string()
    }

    pub fn format_csv(&self, track: &FormattedTrack) -> String {
        let mut output = String::new();
        if self.include_header {
            output.push_str(&self.header());
            output.push('\n');
        }
        for wp in &track.waypoints {
            output.push_str(&format!("{},{},{},{}\n", wp.index, wp.latitude, wp.longitude, wp.leg_distance));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{PolePolicy, TranslationStrategy};
    use std::f64::consts::FRAC_PI_2;

    fn flat_track() -> FormattedTrack {
        let mut nav = Navigator::cartesian(0.0, 0.0);
        nav.move_by(0.0, 1.0).unwrap();
        nav.move_by(FRAC_PI_2, 2.0).unwrap();
        TrackFormatter::new().format_navigator(&nav)
    }

    #[test]
    fn test_flat_track_records() {
        let track = flat_track();
        assert_eq!(track.geometry, Geometry::FlatPlane);
        assert_eq!(track.angle_unit, None);
        assert_eq!(track.waypoints.len(), 3);
        assert_eq!(track.waypoints[1], WaypointRecord { index: 1, latitude: 0.0, longitude: 1.0, leg_distance: 1.0 });
        assert_eq!(track.waypoints[2].latitude, 2.0);
        assert_eq!(track.waypoints[2].longitude, 1.0);
        assert_eq!(track.total_distance, 3.0);
    }

    #[test]
    fn test_degrees_and_nautical_miles() {
        let mut nav = Navigator::new(TranslationStrategy::great_circle(PolePolicy::Reject), 0.0, 0.0);
        nav.move_by(0.0, 1f64.to_radians()).unwrap();

        let track = TrackFormatter::new()
            .with_angle_unit(AngleUnit::Degrees)
            .with_distance_unit(DistanceUnit::NauticalMiles)
            .with_precision(3)
            .format_navigator(&nav);

        assert_eq!(track.waypoints[1].latitude, 1.0);
        assert_eq!(track.waypoints[1].longitude, 0.0);
        assert_eq!(track.waypoints[1].leg_distance, 60.0);
        assert_eq!(track.total_distance, 60.0);
    }

    #[test]
    fn test_text_output() {
        let text = TextFormatter::new().format_text(&flat_track());
        assert!(text.starts_with("Track (flat_plane, 3 waypoints):\n"));
        assert!(text.contains("#1   lat 0, lon 1  (+1)"));
        assert!(text.ends_with("Total distance: 3\n"));

        let compact = TextFormatter::compact().format_text(&flat_track());
        assert_eq!(compact, "0 0 0\n1 0 1\n2 2 1\n");
    }

    #[test]
    fn test_csv_output() {
        let csv = CsvFormatter::new().format_csv(&flat_track());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "index,latitude,longitude,leg_distance");
        assert_eq!(lines[1], "0,0,0,0");
        assert_eq!(lines[3], "2,2,1,2");

        let headless = CsvFormatter { include_header: false }.format_csv(&flat_track());
        assert_eq!(headless.lines().count(), 3);
    }

    #[test]
    fn test_json_round_trip() {
        let track = flat_track();
        let json = JsonFormatter::new().format_json(&track).unwrap();
        assert!(json.contains("\"geometry\":\"flat_plane\""));

        let parsed: FormattedTrack = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, track);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
