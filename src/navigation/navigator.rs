//! A waypoint log bound to one translation strategy

use tracing::debug;

use crate::algorithms::{PolePolicy, TranslationStrategy};
use crate::core::Position;
use crate::navigation::{Leg, WaypointLog};
use crate::validation::TranslationResult;

/// Tracks waypoints as the turtle is moved by bearing and distance.
///
/// The strategy is injected at construction; every call site is the same
/// whichever geometry is in use.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    strategy: TranslationStrategy,
    log: WaypointLog,
}

impl Navigator {
    pub fn new(strategy: TranslationStrategy, latitude: f64, longitude: f64) -> Self {
        Self {
            strategy,
            log: WaypointLog::new(Position::new(latitude, longitude)),
        }
    }

    /// Great-circle navigator rejecting moves whose longitude is undefined at a pole
    pub fn spherical(latitude: f64, longitude: f64) -> Self {
        Self::new(TranslationStrategy::great_circle(PolePolicy::Reject), latitude, longitude)
    }

    pub fn cartesian(latitude: f64, longitude: f64) -> Self {
        Self::new(TranslationStrategy::flat_plane(), latitude, longitude)
    }

    /// Resume from an existing history
    pub fn with_log(strategy: TranslationStrategy, log: WaypointLog) -> Self {
        Self { strategy, log }
    }

    pub fn move_by(&mut self, bearing: f64, distance: f64) -> TranslationResult<()> {
        self.log.move_by(bearing, distance, &self.strategy)
    }

    /// Apply legs in order, stopping at the first failure.
    ///
    /// Legs completed before the failure stay in the log.
    pub fn follow(&mut self, legs: &[Leg]) -> TranslationResult<()> {
        for (index, leg) in legs.iter().enumerate() {
            if let Err(e) = self.move_by(leg.bearing, leg.distance) {
                debug!(index, %leg, error = %e, "route stopped");
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn recenter(&mut self, latitude: f64, longitude: f64) {
        self.log.recenter(Position::new(latitude, longitude));
    }

    pub fn recenter_origin(&mut self) {
        self.log.recenter(Position::origin());
    }

    pub fn current_position(&self) -> Position {
        self.log.current_position()
    }

    pub fn waypoints(&self) -> &[Position] {
        self.log.waypoints()
    }

    pub fn total_distance(&self) -> f64 {
        self.log.total_distance(&self.strategy)
    }

    pub fn strategy(&self) -> &TranslationStrategy {
        &self.strategy
    }

    pub fn log(&self) -> &WaypointLog {
        &self.log
    }

    pub fn into_log(self) -> WaypointLog {
        self.log
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::cartesian(0.0, 0.0)
    }
}
