//! Journey ranking for search results.

use crate::domain::Journey;

/// Order journeys by total duration, shortest first, and keep at most
/// `max_results`.
///
/// The sort is stable: journeys with equal duration keep their input
/// order, so direct journeys found first stay ahead of equally long
/// transfer journeys.
pub fn rank_journeys(mut journeys: Vec<Journey>, max_results: usize) -> Vec<Journey> {
    journeys.sort_by_key(Journey::total_duration_mins);
    journeys.truncate(max_results);
    journeys
}
