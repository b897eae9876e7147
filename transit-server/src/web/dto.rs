//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, RouteLeg, ScheduleTime, Stop};

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin stop ID
    pub origin: String,

    /// Destination stop ID
    pub destination: String,

    /// Earliest departure in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// Request to search stops by name or code.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Search query
    pub q: String,

    /// Maximum number of results (default 10)
    pub limit: Option<usize>,
}

/// Response for stop search.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopResult>,
}

/// A stop in search results.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub id: String,
    pub code: Option<String>,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub is_interchange: bool,
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    /// Found journey options, best first
    pub journeys: Vec<JourneyResult>,

    /// Number of stops tried as transfer points
    pub candidates_explored: usize,
}

/// A journey option.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    pub origin: StopInfo,
    pub destination: StopInfo,

    /// Legs in travel order
    pub legs: Vec<LegResult>,

    /// Departure time (HH:MM)
    pub departure_time: String,

    /// Arrival time (HH:MM)
    pub arrival_time: String,

    /// Total duration in minutes, including any transfer allowance
    pub duration_mins: u32,

    /// Total distance in km
    pub distance_km: f64,

    /// Number of transfers (0 or 1)
    pub transfers: usize,

    /// Walking allowance in minutes
    pub walking_mins: u32,
}

/// A single ride on one route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub route: RouteInfo,
    pub trip_id: String,
    pub headsign: Option<String>,
    pub origin: StopInfo,
    pub destination: StopInfo,

    /// Departure from origin
    pub departure: TimeInfo,

    /// Arrival at destination
    pub arrival: TimeInfo,

    pub duration_mins: u32,
    pub distance_km: f64,

    /// Stops passed between origin and destination
    pub intermediate_stops: Vec<StopInfo>,
}

/// Route information for display.
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub id: String,

    /// Short name, or the long name when the route has none
    pub name: String,

    pub short_name: String,
    pub long_name: String,

    /// Hex colour, without `#`
    pub color: Option<String>,
}

/// Stop information for display.
#[derive(Debug, Serialize)]
pub struct StopInfo {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A time in both schedule and display form.
#[derive(Debug, Serialize)]
pub struct TimeInfo {
    /// `HH:MM`, hours may exceed 23
    pub time: String,

    /// 12-hour clock, e.g. `8:10 AM`
    pub display: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl JourneyResult {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            origin: StopInfo::from_stop(journey.origin()),
            destination: StopInfo::from_stop(journey.destination()),
            legs: journey.legs().iter().map(LegResult::from_leg).collect(),
            departure_time: journey.departure_time().to_string(),
            arrival_time: journey.arrival_time().to_string(),
            duration_mins: journey.total_duration_mins(),
            distance_km: journey.total_distance_km(),
            transfers: journey.transfer_count(),
            walking_mins: journey.walking_mins(),
        }
    }
}

impl LegResult {
    /// Create from a domain RouteLeg.
    pub fn from_leg(leg: &RouteLeg) -> Self {
        let route = leg.route();
        let trip = leg.trip();

        Self {
            route: RouteInfo {
                id: route.id.to_string(),
                name: route.display_name().to_string(),
                short_name: route.short_name.clone(),
                long_name: route.long_name.clone(),
                color: route.color.clone(),
            },
            trip_id: trip.id.to_string(),
            headsign: trip.headsign.clone(),
            origin: StopInfo::from_stop(leg.origin()),
            destination: StopInfo::from_stop(leg.destination()),
            departure: TimeInfo::from_time(leg.departure_time()),
            arrival: TimeInfo::from_time(leg.arrival_time()),
            duration_mins: leg.duration_mins(),
            distance_km: leg.distance_km(),
            intermediate_stops: leg
                .intermediate_stops()
                .iter()
                .map(|s| StopInfo::from_stop(s))
                .collect(),
        }
    }
}

impl StopInfo {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            name: stop.name.clone(),
            lat: stop.lat,
            lon: stop.lon,
        }
    }
}

impl StopResult {
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            id: stop.id.to_string(),
            code: stop.code.clone(),
            name: stop.name.clone(),
            lat: stop.lat,
            lon: stop.lon,
            is_interchange: stop.is_interchange(),
        }
    }
}

impl TimeInfo {
    pub fn from_time(time: ScheduleTime) -> Self {
        Self {
            time: time.to_string(),
            display: time.format_12h(),
        }
    }
}
