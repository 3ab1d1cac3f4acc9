//! Track output for callers and the command-line tool

pub mod formatting;

pub use formatting::{
    CsvFormatter, FormattedTrack, JsonFormatter, OutputFormat, TextFormatter, TrackFormatter,
    WaypointRecord,
};
