use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::algorithms::{Geometry, PolePolicy, TranslationStrategy};
use crate::core::{nautical_miles_to_radians, normalize_bearing, radians_to_nautical_miles, Position};
use crate::navigation::{Leg, Navigator};

/// Unit for bearings and, on a sphere, for coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    pub fn unit_to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    pub fn radians_to_unit(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_degrees(),
        }
    }
}

/// Unit for leg distances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Planar units, or radians of arc on the sphere
    #[default]
    Native,
    /// Only meaningful for great circles
    NauticalMiles,
}

impl DistanceUnit {
    pub fn unit_to_native(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Native => value,
            DistanceUnit::NauticalMiles => nautical_miles_to_radians(value),
        }
    }

    pub fn native_to_unit(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Native => value,
            DistanceUnit::NauticalMiles => radians_to_nautical_miles(value),
        }
    }
}

/// Navigator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Geometric model used for every move
    pub geometry: Geometry,
    /// Starting point, in `angle_unit` for great circles and planar units otherwise
    pub origin: Position,
    /// Unit of bearings and spherical coordinates on input and output
    pub angle_unit: AngleUnit,
    /// Unit of leg distances on input and output
    pub distance_unit: DistanceUnit,
    /// Behaviour of great-circle moves at a pole
    pub pole_policy: PolePolicy,
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::FlatPlane,
            origin: Position::origin(),
            angle_unit: AngleUnit::Radians,
            distance_unit: DistanceUnit::Native,
            pole_policy: PolePolicy::Reject,
            debug_logging: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl NavigatorConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: NavigatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        info!(path = %path.display(), geometry = %config.geometry, "loaded navigator config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the combination of settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.origin.is_finite() {
            return Err(ConfigError::InvalidParameter {
                parameter: "origin".to_string(),
                value: self.origin.to_string(),
                reason: "coordinates must be finite".to_string(),
            });
        }

        match self.geometry {
            Geometry::GreatCircle => {
                let latitude = self.origin_position().latitude;
                if latitude.abs() > FRAC_PI_2 {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "origin.latitude".to_string(),
                        value: self.origin.latitude.to_string(),
                        reason: "latitude must lie between the poles".to_string(),
                    });
                }
            }
            Geometry::FlatPlane => {
                if self.distance_unit == DistanceUnit::NauticalMiles {
                    return Err(ConfigError::InvalidParameter {
                        parameter: "distance_unit".to_string(),
                        value: "nautical_miles".to_string(),
                        reason: "nautical miles require great_circle geometry".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Origin in the navigator's native units
    pub fn origin_position(&self) -> Position {
        match self.geometry {
            Geometry::GreatCircle => Position::new(
                self.angle_unit.unit_to_radians(self.origin.latitude),
                self.angle_unit.unit_to_radians(self.origin.longitude),
            ),
            Geometry::FlatPlane => self.origin,
        }
    }

    /// Convert a leg entered in configured units to native units.
    ///
    /// Bearings are wrapped into (-π, π] so compass input such as 270° heads west.
    pub fn leg_to_native(&self, leg: Leg) -> Leg {
        leg.scaled(
            |b| normalize_bearing(self.angle_unit.unit_to_radians(b)),
            |d| self.distance_unit.unit_to_native(d),
        )
    }

    pub fn strategy(&self) -> TranslationStrategy {
        TranslationStrategy::for_geometry(self.geometry, self.pole_policy)
    }

    pub fn build_navigator(&self) -> Result<Navigator, ConfigError> {
        self.validate()?;
        let origin = self.origin_position();
        Ok(Navigator::new(self.strategy(), origin.latitude, origin.longitude))
    }
}

/// Holds the active configuration and tracks edits
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: NavigatorConfig,
    config_file_path: Option<PathBuf>,
    is_modified: bool,
}

impl ConfigurationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Replace the configuration if it validates
    pub fn update_config(&mut self, config: NavigatorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Switch geometry, returning the previous one
    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<Geometry, ConfigError> {
        let candidate = NavigatorConfig {
            geometry,
            ..self.config.clone()
        };
        candidate.validate()?;
        let old = std::mem::replace(&mut self.config.geometry, geometry);
        self.is_modified = true;
        Ok(old)
    }

    pub fn set_pole_policy(&mut self, pole_policy: PolePolicy) -> PolePolicy {
        self.is_modified = true;
        std::mem::replace(&mut self.config.pole_policy, pole_policy)
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        self.config = NavigatorConfig::from_file(&path)?;
        self.config_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.config.to_json()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    pub fn config_file_path(&self) -> Option<&Path> {
        self.config_file_path.as_deref()
    }

    /// Whether the configuration changed since it was loaded or saved
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("turtle_nav_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert_eq!(config.geometry, Geometry::FlatPlane);
        assert_eq!(config.origin, Position::origin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = NavigatorConfig::from_json_str(r#"{"geometry": "great_circle"}"#).unwrap();
        assert_eq!(config.geometry, Geometry::GreatCircle);
        assert_eq!(config.pole_policy, PolePolicy::Reject);
        assert_eq!(config.angle_unit, AngleUnit::Radians);
    }

    #[test]
    fn test_degrees_origin_converted() {
        let json = r#"{
            "geometry": "great_circle",
            "angle_unit": "degrees",
            "origin": {"latitude": 45.0, "longitude": -90.0},
            "pole_policy": "hold_longitude"
        }"#;
        let config = NavigatorConfig::from_json_str(json).unwrap();
        let nav = config.build_navigator().unwrap();

        assert_abs_diff_eq!(nav.current_position().latitude, FRAC_PI_2 / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(nav.current_position().longitude, -FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(config.strategy(), TranslationStrategy::great_circle(PolePolicy::HoldLongitude));
    }

    #[test]
    fn test_invalid_latitude_rejected() {
        let json = r#"{"geometry": "great_circle", "angle_unit": "degrees", "origin": {"latitude": 95.0, "longitude": 0.0}}"#;
        let err = NavigatorConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { ref parameter, .. } if parameter == "origin.latitude"));
    }

    #[test]
    fn test_flat_plane_ignores_latitude_range() {
        let json = r#"{"geometry": "flat_plane", "origin": {"latitude": 95.0, "longitude": 0.0}}"#;
        assert!(NavigatorConfig::from_json_str(json).is_ok());
    }

    #[test]
    fn test_nautical_miles_need_sphere() {
        let config = NavigatorConfig {
            distance_unit: DistanceUnit::NauticalMiles,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = NavigatorConfig {
            geometry: Geometry::GreatCircle,
            ..config
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_leg_to_native() {
        let config = NavigatorConfig {
            geometry: Geometry::GreatCircle,
            angle_unit: AngleUnit::Degrees,
            distance_unit: DistanceUnit::NauticalMiles,
            ..Default::default()
        };
        let leg = config.leg_to_native(Leg::new(90.0, 60.0));
        assert_abs_diff_eq!(leg.bearing, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(leg.distance, 1f64.to_radians(), epsilon = 1e-15);
    }

    #[test]
    fn test_compass_bearings_wrap_to_same_direction() {
        let config = NavigatorConfig {
            geometry: Geometry::GreatCircle,
            angle_unit: AngleUnit::Degrees,
            ..Default::default()
        };

        let wrapped = config.leg_to_native(Leg::new(270.0, 5.0));
        let signed = config.leg_to_native(Leg::new(-90.0, 5.0));
        assert_abs_diff_eq!(wrapped.bearing, signed.bearing, epsilon = 1e-12);

        let mut west = config.build_navigator().unwrap();
        west.move_by(wrapped.bearing, wrapped.distance.to_radians()).unwrap();
        let mut also_west = config.build_navigator().unwrap();
        also_west.move_by(signed.bearing, signed.distance.to_radians()).unwrap();

        let (lat, lon) = west.current_position().to_degrees();
        let (expected_lat, expected_lon) = also_west.current_position().to_degrees();
        assert!(lon < 0.0);
        assert_abs_diff_eq!(lat, expected_lat, epsilon = 1e-9);
        assert_abs_diff_eq!(lon, expected_lon, epsilon = 1e-9);

        // The flat plane agrees: both head toward negative latitude
        let flat = NavigatorConfig {
            angle_unit: AngleUnit::Degrees,
            ..Default::default()
        };
        let mut planar = flat.build_navigator().unwrap();
        let leg = flat.leg_to_native(Leg::new(270.0, 5.0));
        planar.move_by(leg.bearing, leg.distance).unwrap();
        assert_abs_diff_eq!(planar.current_position().latitude, -5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_due_south_survives_wrapping() {
        let config = NavigatorConfig {
            geometry: Geometry::GreatCircle,
            ..Default::default()
        };
        assert_eq!(config.leg_to_native(Leg::new(PI, 0.1)).bearing, PI);
        assert_eq!(config.leg_to_native(Leg::new(0.0, 0.1)).bearing, 0.0);
    }

    #[test]
    fn test_malformed_json() {
        let err = NavigatorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = NavigatorConfig::from_file(temp_config_path("does_not_exist")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_manager_save_and_load() {
        let path = temp_config_path("save_load");

        let mut manager = ConfigurationManager::new();
        assert!(!manager.is_modified());
        assert_eq!(manager.set_geometry(Geometry::GreatCircle).unwrap(), Geometry::FlatPlane);
        assert_eq!(manager.set_pole_policy(PolePolicy::HoldLongitude), PolePolicy::Reject);
        assert!(manager.is_modified());

        manager.save_to_file(&path).unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(loaded.config(), manager.config());
        assert_eq!(loaded.config_file_path(), Some(path.as_path()));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_manager_rejects_invalid_switch() {
        let mut manager = ConfigurationManager::new();
        manager
            .update_config(NavigatorConfig {
                geometry: Geometry::GreatCircle,
                distance_unit: DistanceUnit::NauticalMiles,
                ..Default::default()
            })
            .unwrap();

        assert!(manager.set_geometry(Geometry::FlatPlane).is_err());
        assert_eq!(manager.config().geometry, Geometry::GreatCircle);
    }
}
