//! Route and trip records.

use serde::{Deserialize, Serialize};

use super::{RouteId, TripId};

/// A route from the `routes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "route_id")]
    pub id: RouteId,

    #[serde(rename = "route_short_name", default)]
    pub short_name: String,

    #[serde(rename = "route_long_name", default)]
    pub long_name: String,

    /// Hex colour without the leading `#`.
    #[serde(rename = "route_color", default)]
    pub color: Option<String>,

    /// GTFS `route_type` (3 = bus, 1 = metro, ...).
    #[serde(rename = "route_type", default)]
    pub route_type: u16,
}

impl Route {
    /// Create a route with a short name and defaults elsewhere.
    pub fn new(id: impl Into<RouteId>, short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            short_name: short_name.into(),
            long_name: String::new(),
            color: None,
            route_type: 3,
        }
    }

    /// Name for display: the short name, falling back to the long name.
    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.long_name
        } else {
            &self.short_name
        }
    }
}

/// Direction of travel (`direction_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Direction {
    /// 0
    #[default]
    Outbound,
    /// 1
    Inbound,
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        if value == 1 {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Outbound => 0,
            Direction::Inbound => 1,
        }
    }
}

/// A trip from the `trips` table. Belongs to exactly one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "trip_id")]
    pub id: TripId,

    pub route_id: RouteId,

    #[serde(rename = "direction_id", default)]
    pub direction: Direction,

    #[serde(rename = "trip_headsign", default)]
    pub headsign: Option<String>,
}

impl Trip {
    /// Create an outbound trip on a route.
    pub fn new(id: impl Into<TripId>, route_id: impl Into<RouteId>) -> Self {
        Self {
            id: id.into(),
            route_id: route_id.into(),
            direction: Direction::Outbound,
            headsign: None,
        }
    }
}
