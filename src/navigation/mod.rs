//! Waypoint tracking on top of the translation strategies

pub mod waypoint_log;
pub mod navigator;
pub mod route;

pub use waypoint_log::{EmptyLogError, WaypointLog};
pub use navigator::Navigator;
pub use route::Leg;
