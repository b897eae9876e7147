//! Direct-route search.
//!
//! Finds every route with a trip that calls at the origin and later at the
//! destination, departing the origin no earlier than the requested time.
//! Several trips of one route are redundant for ranking, so only the
//! earliest departure per route is kept.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::domain::{Journey, LegCall, RouteId, RouteLeg, ScheduleTime, Stop, TimedStop, TripId};
use crate::schedule::ScheduleIndex;

/// Single-leg journeys from `origin` to `destination`.
pub fn find_direct_journeys(
    index: &ScheduleIndex,
    origin: &Arc<Stop>,
    destination: &Arc<Stop>,
    after: ScheduleTime,
) -> Vec<Journey> {
    find_direct_legs(index, origin, destination, after)
        .into_iter()
        .map(Journey::direct)
        .collect()
}

/// One leg per route from `origin` to `destination`, departing at or after
/// `after`.
///
/// Routes appear in the order they were first found. Returns an empty list
/// when origin and destination are the same stop.
pub fn find_direct_legs(
    index: &ScheduleIndex,
    origin: &Arc<Stop>,
    destination: &Arc<Stop>,
    after: ScheduleTime,
) -> Vec<RouteLeg> {
    if origin.id == destination.id {
        return Vec::new();
    }

    // Map from trip -> its calls at the destination.
    let mut at_destination: HashMap<&TripId, Vec<&TimedStop>> = HashMap::new();
    for call in index.stop_times_at(&destination.id) {
        at_destination.entry(&call.trip_id).or_default().push(call);
    }

    let candidates = index.stop_times_at(&origin.id).iter().filter_map(|board| {
        let alight = at_destination
            .get(&board.trip_id)?
            .iter()
            .filter(|call| call.sequence > board.sequence)
            .min_by_key(|call| call.sequence)?;

        if board.departure < after {
            return None;
        }

        build_leg(index, board, alight, origin, destination)
    });

    keep_earliest_per_route(candidates)
}

/// Assemble the leg for a boarding and alighting call on the same trip.
fn build_leg(
    index: &ScheduleIndex,
    board: &TimedStop,
    alight: &TimedStop,
    origin: &Arc<Stop>,
    destination: &Arc<Stop>,
) -> Option<RouteLeg> {
    let trip = index.trip(&board.trip_id)?;
    let route = index.route(&trip.route_id)?;

    let intermediate_stops = index
        .trip_stop_times(&trip.id)
        .iter()
        .filter(|call| call.sequence > board.sequence && call.sequence < alight.sequence)
        .filter_map(|call| index.stop(&call.stop_id).cloned())
        .collect();

    RouteLeg::new(
        route.clone(),
        trip.clone(),
        LegCall {
            stop: origin.clone(),
            sequence: board.sequence,
            time: board.departure,
        },
        LegCall {
            stop: destination.clone(),
            sequence: alight.sequence,
            time: alight.arrival,
        },
        intermediate_stops,
    )
    .ok()
}

/// Reduce to one leg per route: the earliest departure, the first found on
/// ties. Routes keep the order in which they were first seen.
fn keep_earliest_per_route(legs: impl IntoIterator<Item = RouteLeg>) -> Vec<RouteLeg> {
    let mut best: Vec<RouteLeg> = Vec::new();
    let mut slot_of: HashMap<RouteId, usize> = HashMap::new();

    for leg in legs {
        match slot_of.entry(leg.route().id.clone()) {
            Entry::Occupied(slot) => {
                let current = &mut best[*slot.get()];
                if leg.departure_time() < current.departure_time() {
                    *current = leg;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(best.len());
                best.push(leg);
            }
        }
    }

    best
}
