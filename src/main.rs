//! `turtle-nav`: plan a route by bearing and distance and print the track.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use turtle_universal::{
    AngleUnit, CsvFormatter, DistanceUnit, Geometry, JsonFormatter, Leg, NavigatorConfig,
    OutputFormat, PolePolicy, Position, TextFormatter, TrackFormatter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GeometryArg {
    Flat,
    Spherical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolePolicyArg {
    Reject,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "turtle-nav", about = "Move a turtle by bearing and distance and print its waypoints")]
struct Cli {
    /// JSON navigator config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Geometric model
    #[arg(long, value_enum)]
    geometry: Option<GeometryArg>,

    /// Starting latitude
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Starting longitude
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Bearings and spherical coordinates are in degrees
    #[arg(long)]
    degrees: bool,

    /// Distances are nautical miles (spherical only)
    #[arg(long)]
    nautical_miles: bool,

    /// Behaviour when a move's longitude is undefined at a pole
    #[arg(long, value_enum)]
    pole_policy: Option<PolePolicyArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Decimal places in the output
    #[arg(long, default_value_t = 6)]
    precision: u8,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Legs as bearing:distance
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<Leg>,
}

impl Cli {
    /// Merge the config file, if any, with command-line overrides
    fn navigator_config(&self) -> anyhow::Result<NavigatorConfig> {
        let mut config = match &self.config {
            Some(path) => NavigatorConfig::from_file(path)?,
            None => NavigatorConfig::default(),
        };

        if let Some(geometry) = self.geometry {
            config.geometry = match geometry {
                GeometryArg::Flat => Geometry::FlatPlane,
                GeometryArg::Spherical => Geometry::GreatCircle,
            };
        }
        if let Some(pole_policy) = self.pole_policy {
            config.pole_policy = match pole_policy {
                PolePolicyArg::Reject => PolePolicy::Reject,
                PolePolicyArg::Hold => PolePolicy::HoldLongitude,
            };
        }
        if self.lat.is_some() || self.lon.is_some() {
            config.origin = Position::new(
                self.lat.unwrap_or(config.origin.latitude),
                self.lon.unwrap_or(config.origin.longitude),
            );
        }
        if self.degrees {
            config.angle_unit = AngleUnit::Degrees;
        }
        if self.nautical_miles {
            config.distance_unit = DistanceUnit::NauticalMiles;
        }
        config.debug_logging |= self.debug;

        config.validate()?;
        Ok(config)
    }

    fn output_format(&self) -> OutputFormat {
        match self.format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn run(cli: &Cli, config: &NavigatorConfig) -> anyhow::Result<bool> {
    let mut navigator = config.build_navigator()?;
    let legs: Vec<Leg> = cli.moves.iter().map(|leg| config.leg_to_native(*leg)).collect();
    info!(geometry = %config.geometry, legs = legs.len(), "planning route");

    let outcome = navigator.follow(&legs);
    if let Err(e) = &outcome {
        error!(completed = navigator.waypoints().len() - 1, "route stopped: {}", e);
    }

    let formatter = TrackFormatter::new()
        .with_angle_unit(config.angle_unit)
        .with_distance_unit(config.distance_unit)
        .with_precision(cli.precision);
    let track = formatter.format_navigator(&navigator);

    let rendered = match cli.output_format() {
        OutputFormat::Text => TextFormatter::new().format_text(&track),
        OutputFormat::Json => {
            let formatter = if cli.pretty { JsonFormatter::pretty() } else { JsonFormatter::new() };
            let mut json = formatter.format_json(&track).context("serializing track")?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => CsvFormatter::new().format_csv(&track),
    };
    print!("{}", rendered);

    Ok(outcome.is_ok())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.navigator_config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(cli.debug);
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };
    init_logging(config.debug_logging);

    match run(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_moves_and_overrides() {
        let cli = Cli::try_parse_from([
            "turtle-nav", "--geometry", "spherical", "--degrees", "--lat", "-10", "0:1", "-90:2.5",
        ])
        .unwrap();
        assert_eq!(cli.moves, vec![Leg::new(0.0, 1.0), Leg::new(-90.0, 2.5)]);

        let config = cli.navigator_config().unwrap();
        assert_eq!(config.geometry, Geometry::GreatCircle);
        assert_eq!(config.angle_unit, AngleUnit::Degrees);
        assert_eq!(config.origin, Position::new(-10.0, 0.0));
    }

    #[test]
    fn test_bad_move_rejected() {
        assert!(Cli::try_parse_from(["turtle-nav", "north"]).is_err());
    }

    #[test]
    fn test_nautical_miles_on_flat_plane_is_invalid() {
        let cli = Cli::try_parse_from(["turtle-nav", "--nautical-miles", "0:1"]).unwrap();
        assert!(cli.navigator_config().is_err());
    }

    #[test]
    fn test_run_reports_failure_without_error() {
        let cli = Cli::try_parse_from([
            "turtle-nav", "--geometry", "spherical", "--lat", "1.5707963267948966", "1:0.1",
        ])
        .unwrap();
        let config = cli.navigator_config().unwrap();
        assert!(!run(&cli, &config).unwrap());
    }
}
