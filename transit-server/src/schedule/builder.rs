//! Fluent construction of schedule tables in code.

use crate::domain::{LocationType, Route, Stop, StopTime, Trip};

use super::{Schedule, ScheduleIndex};

/// Builder for assembling a [`Schedule`].
///
/// Trips are given as ordered calls; stop sequences are assigned 1, 2, 3...
///
/// # Example
///
/// ```
/// use transit_server::schedule::ScheduleBuilder;
///
/// let index = ScheduleBuilder::new()
///     .stop("A", "Alpha", 40.00, -3.0)
///     .stop("B", "Beta", 40.05, -3.0)
///     .route("670", "670")
///     .trip("T1", "670", &[("A", "08:10", "08:10"), ("B", "08:25", "08:25")])
///     .index();
///
/// assert_eq!(index.stop_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    inner: Schedule,
}

impl ScheduleBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular stop.
    pub fn stop(mut self, id: &str, name: &str, lat: f64, lon: f64) -> Self {
        self.inner.stops.push(Stop::new(id, name, lat, lon));
        self
    }

    /// Add a stop flagged as an interchange.
    pub fn interchange(mut self, id: &str, name: &str, lat: f64, lon: f64) -> Self {
        let mut stop = Stop::new(id, name, lat, lon);
        stop.location_type = LocationType::Station;
        self.inner.stops.push(stop);
        self
    }

    /// Add a fully specified stop.
    pub fn add_stop(mut self, stop: Stop) -> Self {
        self.inner.stops.push(stop);
        self
    }

    /// Add a route.
    pub fn route(mut self, id: &str, short_name: &str) -> Self {
        self.inner.routes.push(Route::new(id, short_name));
        self
    }

    /// Add a trip with its calls as `(stop, arrival, departure)`.
    ///
    /// An empty arrival or departure copies the other one.
    pub fn trip(mut self, id: &str, route_id: &str, calls: &[(&str, &str, &str)]) -> Self {
        self.inner.trips.push(Trip::new(id, route_id));

        for (seq, (stop, arr, dep)) in (1u32..).zip(calls) {
            let arrival = if arr.is_empty() { dep } else { arr };
            let departure = if dep.is_empty() { arr } else { dep };
            self.inner.stop_times.push(StopTime {
                trip_id: id.into(),
                stop_id: (*stop).into(),
                arrival_time: (*arrival).to_string(),
                departure_time: (*departure).to_string(),
                stop_sequence: seq,
            });
        }
        self
    }

    /// Add a raw stop-time row.
    pub fn stop_time(mut self, stop_time: StopTime) -> Self {
        self.inner.stop_times.push(stop_time);
        self
    }

    /// Finish and return the tables.
    pub fn build(self) -> Schedule {
        self.inner
    }

    /// Finish and index the tables.
    pub fn index(self) -> ScheduleIndex {
        ScheduleIndex::build(self.inner)
    }
}
