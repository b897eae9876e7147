//! Schedule index for repeated journey queries.
//!
//! Every query needs "which trips call at this stop?" and "what is this
//! trip's ordered list of stops?". Answering either from the flat
//! `stop_times` table means a full scan, so both are precomputed here once.
//! After construction the index is never mutated and can be shared freely
//! between concurrent queries.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Route, RouteId, Stop, StopId, StopTime, TimedStop, Trip, TripId};

use super::Schedule;

/// Immutable lookup structures over one schedule.
#[derive(Debug, Default)]
pub struct ScheduleIndex {
    /// Stops in input order.
    stops: Vec<Arc<Stop>>,

    /// Map from stop id -> position in `stops`.
    stop_positions: HashMap<StopId, usize>,

    routes: HashMap<RouteId, Arc<Route>>,

    trips: HashMap<TripId, Arc<Trip>>,

    /// Map from stop -> stop-times at that stop, in input order.
    by_stop: HashMap<StopId, Vec<TimedStop>>,

    /// Map from trip -> its stop-times ordered by sequence.
    by_trip: HashMap<TripId, Vec<TimedStop>>,

    /// Stop-time records dropped while indexing.
    skipped_records: usize,
}

impl ScheduleIndex {
    /// Build the index, consuming the raw tables.
    ///
    /// Stop-time rows with an unparseable time, an unknown trip or an
    /// unknown stop are dropped and counted. Within a trip, a repeated
    /// stop sequence keeps the first row seen.
    pub fn build(schedule: Schedule) -> Self {
        let Schedule {
            stops,
            routes,
            trips,
            stop_times,
        } = schedule;

        let mut index = Self::default();

        for stop in stops {
            match index.stop_positions.entry(stop.id.clone()) {
                Entry::Occupied(_) => {
                    warn!(stop_id = %stop.id, "duplicate stop id, keeping first");
                }
                Entry::Vacant(slot) => {
                    slot.insert(index.stops.len());
                    index.stops.push(Arc::new(stop));
                }
            }
        }

        for route in routes {
            index
                .routes
                .entry(route.id.clone())
                .or_insert_with(|| Arc::new(route));
        }

        for trip in trips {
            if !index.routes.contains_key(&trip.route_id) {
                warn!(trip_id = %trip.id, route_id = %trip.route_id, "trip references unknown route");
            }
            index
                .trips
                .entry(trip.id.clone())
                .or_insert_with(|| Arc::new(trip));
        }

        // Validate every row, remembering its input position.
        let mut parsed: Vec<Option<TimedStop>> = Vec::with_capacity(stop_times.len());
        let mut rows_by_trip: HashMap<TripId, Vec<usize>> = HashMap::new();
        for (row, record) in stop_times.iter().enumerate() {
            let timed = index.validate_record(record);
            if let Some(timed) = &timed {
                rows_by_trip
                    .entry(timed.trip_id.clone())
                    .or_default()
                    .push(row);
            } else {
                index.skipped_records += 1;
            }
            parsed.push(timed);
        }

        // Order each trip by sequence. Rows were pushed in input order and
        // the sort is stable, so dedup keeps the first row per sequence.
        let mut kept = vec![false; parsed.len()];
        for (trip_id, mut rows) in rows_by_trip {
            let sequence_of = |row: &usize| parsed[*row].as_ref().map(|st| st.sequence);
            rows.sort_by_key(sequence_of);
            let before = rows.len();
            rows.dedup_by_key(|row| sequence_of(&*row));
            if rows.len() < before {
                warn!(trip_id = %trip_id, duplicates = before - rows.len(), "repeated stop sequence");
                index.skipped_records += before - rows.len();
            }

            let calls = rows
                .into_iter()
                .filter_map(|row| {
                    kept[row] = true;
                    parsed[row].clone()
                })
                .collect();
            index.by_trip.insert(trip_id, calls);
        }

        // The per-stop view keeps input order.
        for (timed, _) in parsed.into_iter().zip(kept).filter(|(_, kept)| *kept) {
            if let Some(timed) = timed {
                index
                    .by_stop
                    .entry(timed.stop_id.clone())
                    .or_default()
                    .push(timed);
            }
        }

        if index.skipped_records > 0 {
            warn!(
                skipped = index.skipped_records,
                "dropped invalid stop time records"
            );
        }
        info!(
            stops = index.stops.len(),
            routes = index.routes.len(),
            trips = index.trips.len(),
            stop_times = index.by_trip.values().map(Vec::len).sum::<usize>(),
            "schedule indexed"
        );

        index
    }

    /// Look up a stop.
    pub fn stop(&self, id: &StopId) -> Option<&Arc<Stop>> {
        self.stop_positions.get(id).map(|&pos| &self.stops[pos])
    }

    /// Returns true if the stop exists.
    pub fn contains_stop(&self, id: &StopId) -> bool {
        self.stop_positions.contains_key(id)
    }

    /// All stops in input order.
    pub fn stops(&self) -> impl Iterator<Item = &Arc<Stop>> {
        self.stops.iter()
    }

    /// Look up a route.
    pub fn route(&self, id: &RouteId) -> Option<&Arc<Route>> {
        self.routes.get(id)
    }

    /// Look up a trip.
    pub fn trip(&self, id: &TripId) -> Option<&Arc<Trip>> {
        self.trips.get(id)
    }

    /// The route a trip runs on.
    pub fn route_for_trip(&self, trip_id: &TripId) -> Option<&Arc<Route>> {
        self.trips
            .get(trip_id)
            .and_then(|trip| self.routes.get(&trip.route_id))
    }

    /// Stop-times at a stop, in input order.
    pub fn stop_times_at(&self, stop: &StopId) -> &[TimedStop] {
        self.by_stop.get(stop).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// A trip's stop-times ordered by sequence.
    pub fn trip_stop_times(&self, trip: &TripId) -> &[TimedStop] {
        self.by_trip.get(trip).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Case-insensitive substring search over stop names and codes.
    ///
    /// Results are in input order.
    pub fn search_stops(&self, query: &str, limit: usize) -> Vec<&Arc<Stop>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.stops
            .iter()
            .filter(|stop| {
                stop.name.to_lowercase().contains(&needle)
                    || stop
                        .code
                        .as_ref()
                        .is_some_and(|code| code.to_lowercase().contains(&needle))
                    || stop.id.as_str().eq_ignore_ascii_case(&needle)
            })
            .take(limit)
            .collect()
    }

    /// Number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of trips.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Number of stop-time rows dropped while indexing.
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }
}

impl ScheduleIndex {
    /// Parse a raw row, or `None` if it cannot be used.
    fn validate_record(&self, record: &StopTime) -> Option<TimedStop> {
        if !self.trips.contains_key(&record.trip_id) {
            debug!(trip_id = %record.trip_id, "stop time for unknown trip");
            return None;
        }
        if !self.stop_positions.contains_key(&record.stop_id) {
            debug!(stop_id = %record.stop_id, "stop time at unknown stop");
            return None;
        }

        match TimedStop::from_record(record) {
            Ok(timed) => Some(timed),
            Err(e) => {
                warn!(
                    trip_id = %record.trip_id,
                    stop_sequence = record.stop_sequence,
                    "skipping stop time: {e}"
                );
                None
            }
        }
    }
}
