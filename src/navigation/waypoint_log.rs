//! Append-only waypoint history
//!
//! The log is never empty: it is seeded on creation and on every recenter,
//! and a move appends exactly one entry or nothing at all.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::algorithms::PositionTranslator;
use crate::core::Position;
use crate::validation::TranslationResult;

/// Returned when deserializing a log with no waypoints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a waypoint log needs at least one position")]
pub struct EmptyLogError;

/// Ordered travel history; the last entry is the current position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Position>", into = "Vec<Position>")]
pub struct WaypointLog {
    waypoints: Vec<Position>,
    current: Position,
}

impl WaypointLog {
    /// Start a log at `seed`
    pub fn new(seed: Position) -> Self {
        Self {
            waypoints: vec![seed],
            current: seed,
        }
    }

    /// Translate the current position and append the result.
    ///
    /// On error the log is left unchanged.
    pub fn move_by<T>(&mut self, bearing: f64, distance: f64, translator: &T) -> TranslationResult<()>
    where
        T: PositionTranslator + ?Sized,
    {
        let next = translator.translate(self.current, bearing, distance)?;
        debug!(
            geometry = %translator.geometry(),
            bearing,
            distance,
            from = %self.current,
            to = %next,
            "moved"
        );
        self.waypoints.push(next);
        self.current = next;
        Ok(())
    }

    /// Discard the history and restart at `position`
    pub fn recenter(&mut self, position: Position) {
        info!(position = %position, discarded = self.waypoints.len(), "recentered");
        self.waypoints.clear();
        self.waypoints.push(position);
        self.current = position;
    }

    pub fn current_position(&self) -> Position {
        self.current
    }

    /// The seed of the current history
    pub fn start_position(&self) -> Position {
        self.waypoints[0]
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    /// Number of waypoints, always at least one
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consecutive (from, to) pairs
    pub fn segments(&self) -> impl Iterator<Item = (&Position, &Position)> + '_ {
        self.waypoints.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Summed leg length under the translator's metric
    pub fn total_distance<T>(&self, translator: &T) -> f64
    where
        T: PositionTranslator + ?Sized,
    {
        self.segments()
            .map(|(from, to)| translator.distance_between(from, to))
            .sum()
    }
}

impl Default for WaypointLog {
    fn default() -> Self {
        Self::new(Position::origin())
    }
}

impl TryFrom<Vec<Position>> for WaypointLog {
    type Error = EmptyLogError;

    fn try_from(waypoints: Vec<Position>) -> Result<Self, Self::Error> {
        let current = *waypoints.last().ok_or(EmptyLogError)?;
        Ok(Self { waypoints, current })
    }
}

impl From<WaypointLog> for Vec<Position> {
    fn from(log: WaypointLog) -> Self {
        log.waypoints
    }
}
