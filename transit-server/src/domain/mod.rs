//! Domain types for the journey planner.
//!
//! This module contains the schedule records consumed by the planner and
//! the derived journey values it produces. Derived types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod ids;
mod journey;
mod leg;
mod route;
mod stop;
mod stop_time;
mod time;

pub use error::DomainError;
pub use ids::{RouteId, StopId, TripId};
pub use journey::Journey;
pub use leg::{LegCall, RouteLeg};
pub use route::{Direction, Route, Trip};
pub use stop::{LocationType, Stop};
pub use stop_time::{StopTime, TimedStop};
pub use time::{ScheduleTime, TimeError};
