//! One-transfer search.
//!
//! Tries a bounded set of stops as transfer points and composes two direct
//! legs through each one, keeping combinations whose connection wait falls
//! in the configured window.

use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::{Journey, ScheduleTime, Stop};
use crate::geo::haversine_km;
use crate::schedule::ScheduleIndex;

use super::config::PlannerConfig;
use super::direct::find_direct_legs;

/// Stops worth trying as the transfer point between `origin` and
/// `destination`, in schedule order.
///
/// A stop qualifies if it is an interchange, or if it lies within the
/// transfer radius of both ends. At most `max_transfer_candidates` are
/// returned.
pub fn transfer_candidates<'a>(
    index: &'a ScheduleIndex,
    config: &PlannerConfig,
    origin: &Stop,
    destination: &Stop,
) -> Vec<&'a Arc<Stop>> {
    let from = origin.coordinate();
    let to = destination.coordinate();

    index
        .stops()
        .filter(|stop| stop.id != origin.id && stop.id != destination.id)
        .filter(|stop| {
            stop.is_interchange()
                || (haversine_km(from, stop.coordinate()) < config.transfer_radius_km
                    && haversine_km(stop.coordinate(), to) < config.transfer_radius_km)
        })
        .take(config.max_transfer_candidates)
        .collect()
}

/// Two-leg journeys through any of `candidates`.
///
/// Candidates are searched in parallel; results keep candidate order, so
/// the cap keeps the first accepted combinations.
pub fn find_transfer_journeys(
    index: &ScheduleIndex,
    config: &PlannerConfig,
    origin: &Arc<Stop>,
    destination: &Arc<Stop>,
    candidates: &[&Arc<Stop>],
    after: ScheduleTime,
) -> Vec<Journey> {
    let per_candidate: Vec<Vec<Journey>> = candidates
        .par_iter()
        .map(|via| connect_via(index, config, origin, via, destination, after))
        .collect();

    per_candidate
        .into_iter()
        .flatten()
        .take(config.max_transfer_results)
        .collect()
}

/// Journeys changing at `via`.
fn connect_via(
    index: &ScheduleIndex,
    config: &PlannerConfig,
    origin: &Arc<Stop>,
    via: &Arc<Stop>,
    destination: &Arc<Stop>,
    after: ScheduleTime,
) -> Vec<Journey> {
    let first_legs = find_direct_legs(index, origin, via, after);
    if first_legs.is_empty() {
        return Vec::new();
    }
    let second_legs = find_direct_legs(index, via, destination, after);

    first_legs
        .iter()
        .flat_map(|first| second_legs.iter().map(move |second| (first, second)))
        .filter(|(first, second)| {
            config.accepts_connection(first.arrival_time().minutes_until(second.departure_time()))
        })
        .filter_map(|(first, second)| {
            Journey::with_transfer(first.clone(), second.clone(), config.transfer_allowance_mins)
                .ok()
        })
        .take(config.max_transfer_results)
        .collect()
}
