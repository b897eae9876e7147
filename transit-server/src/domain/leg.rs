//! Route leg type.
//!
//! A `RouteLeg` is one uninterrupted ride on a single trip, from boarding
//! to alighting. It holds `Arc`s into the schedule index so that cloning a
//! leg while composing transfer journeys is cheap.

use std::sync::Arc;

use super::{DomainError, Route, ScheduleTime, Stop, Trip};
use crate::geo::haversine_km;

/// One end of a leg: the stop, its position on the trip and the time there.
#[derive(Debug, Clone)]
pub struct LegCall {
    pub stop: Arc<Stop>,
    pub sequence: u32,
    pub time: ScheduleTime,
}

/// A ride on one trip between two of its stops.
///
/// # Invariants
///
/// - `alight.sequence > board.sequence` (must travel forward along the trip)
/// - the trip belongs to the route
#[derive(Debug, Clone)]
pub struct RouteLeg {
    route: Arc<Route>,
    trip: Arc<Trip>,
    board: LegCall,
    alight: LegCall,
    intermediate_stops: Vec<Arc<Stop>>,
    distance_km: f64,
}

impl RouteLeg {
    /// Construct a leg, validating direction of travel and trip ownership.
    ///
    /// `board.time` is the departure at the boarding stop and
    /// `alight.time` the arrival at the alighting stop.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the alighting sequence is not after the boarding
    /// sequence, or if the trip is not on the given route.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use transit_server::domain::{LegCall, Route, RouteLeg, ScheduleTime, Stop, Trip};
    ///
    /// let route = Arc::new(Route::new("670", "670"));
    /// let trip = Arc::new(Trip::new("T1", "670"));
    /// let board = LegCall {
    ///     stop: Arc::new(Stop::new("A", "Alpha", 40.0, -3.0)),
    ///     sequence: 1,
    ///     time: ScheduleTime::parse("08:10").unwrap(),
    /// };
    /// let alight = LegCall {
    ///     stop: Arc::new(Stop::new("B", "Beta", 40.1, -3.0)),
    ///     sequence: 4,
    ///     time: ScheduleTime::parse("08:25").unwrap(),
    /// };
    ///
    /// let leg = RouteLeg::new(route, trip, board, alight, vec![]).unwrap();
    /// assert_eq!(leg.duration_mins(), 15);
    /// ```
    pub fn new(
        route: Arc<Route>,
        trip: Arc<Trip>,
        board: LegCall,
        alight: LegCall,
        intermediate_stops: Vec<Arc<Stop>>,
    ) -> Result<Self, DomainError> {
        if alight.sequence <= board.sequence {
            return Err(DomainError::InvalidLeg(
                "alight sequence must be after board sequence",
            ));
        }
        if trip.route_id != route.id {
            return Err(DomainError::InvalidLeg("trip does not belong to route"));
        }

        let distance_km = haversine_km(board.stop.coordinate(), alight.stop.coordinate());

        Ok(Self {
            route,
            trip,
            board,
            alight,
            intermediate_stops,
            distance_km,
        })
    }

    /// Returns the route ridden.
    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    /// Returns the trip ridden.
    pub fn trip(&self) -> &Arc<Trip> {
        &self.trip
    }

    /// Returns the boarding stop.
    pub fn origin(&self) -> &Arc<Stop> {
        &self.board.stop
    }

    /// Returns the alighting stop.
    pub fn destination(&self) -> &Arc<Stop> {
        &self.alight.stop
    }

    /// Returns the boarding end of the leg.
    pub fn board(&self) -> &LegCall {
        &self.board
    }

    /// Returns the alighting end of the leg.
    pub fn alight(&self) -> &LegCall {
        &self.alight
    }

    /// Departure time from the boarding stop.
    pub fn departure_time(&self) -> ScheduleTime {
        self.board.time
    }

    /// Arrival time at the alighting stop.
    pub fn arrival_time(&self) -> ScheduleTime {
        self.alight.time
    }

    /// Ride time in minutes, never negative.
    pub fn duration_mins(&self) -> u32 {
        let mins = self.board.time.minutes_until(self.alight.time).max(0);
        u32::try_from(mins).unwrap_or(u32::MAX)
    }

    /// Great-circle distance between boarding and alighting stops.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Stops passed between boarding and alighting, in travel order.
    pub fn intermediate_stops(&self) -> &[Arc<Stop>] {
        &self.intermediate_stops
    }
}
