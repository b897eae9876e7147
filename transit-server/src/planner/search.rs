//! Journey search entry point.
//!
//! Combines direct and one-transfer search over a schedule index and ranks
//! the result.

use std::sync::Arc;

use crate::domain::{Journey, ScheduleTime, Stop, StopId, TimeError};
use crate::schedule::ScheduleIndex;

use super::config::PlannerConfig;
use super::direct::find_direct_journeys;
use super::rank::rank_journeys;
use super::transfer::{find_transfer_journeys, transfer_candidates};

/// Error from journey planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// A requested stop is not in the schedule
    #[error("unknown stop: {0}")]
    UnknownStop(StopId),

    /// Origin and destination are the same stop
    #[error("origin and destination are both {0}")]
    SameStop(StopId),

    /// The requested time could not be parsed
    #[error(transparent)]
    InvalidTime(#[from] TimeError),
}

/// Request for journey search.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyRequest {
    pub origin: StopId,
    pub destination: StopId,

    /// Earliest departure from the origin.
    pub time: ScheduleTime,
}

impl JourneyRequest {
    /// Create a new journey request.
    pub fn new(origin: impl Into<StopId>, destination: impl Into<StopId>, time: ScheduleTime) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            time,
        }
    }

    /// Build a request from raw strings, parsing `time` as `HH:MM`.
    pub fn parse(origin: &str, destination: &str, time: &str) -> Result<Self, PlanError> {
        Ok(Self::new(origin, destination, ScheduleTime::parse(time)?))
    }

    /// Check the request against `index`.
    ///
    /// Both stops must exist and must differ. [`Planner::search`] itself
    /// tolerates a same-stop request by returning nothing; callers facing
    /// users reject it here instead.
    pub fn validate(&self, index: &ScheduleIndex) -> Result<(), PlanError> {
        for id in [&self.origin, &self.destination] {
            if !index.contains_stop(id) {
                return Err(PlanError::UnknownStop(id.clone()));
            }
        }
        if self.origin == self.destination {
            return Err(PlanError::SameStop(self.origin.clone()));
        }
        Ok(())
    }
}

/// Result of journey search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found journeys, ranked best-first.
    pub journeys: Vec<Journey>,

    /// Number of stops tried as transfer points.
    pub candidates_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            journeys: Vec::new(),
            candidates_explored: 0,
        }
    }
}

/// Journey planner over a schedule index.
pub struct Planner<'a> {
    index: &'a ScheduleIndex,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(index: &'a ScheduleIndex, config: &'a PlannerConfig) -> Self {
        Self { index, config }
    }

    /// Search for journeys from the request's origin to its destination.
    ///
    /// Direct journeys are gathered first, then one-transfer journeys; the
    /// combined list is ranked by total duration. A request whose origin
    /// and destination are the same stop yields no journeys.
    pub fn search(&self, request: &JourneyRequest) -> Result<SearchResult, PlanError> {
        let origin = self.lookup(&request.origin)?;
        let destination = self.lookup(&request.destination)?;

        if origin.id == destination.id {
            return Ok(SearchResult::empty());
        }

        let mut journeys = find_direct_journeys(self.index, origin, destination, request.time);
        let direct_count = journeys.len();

        let candidates = transfer_candidates(self.index, self.config, origin, destination);
        journeys.extend(find_transfer_journeys(
            self.index,
            self.config,
            origin,
            destination,
            &candidates,
            request.time,
        ));
        let transfer_count = journeys.len() - direct_count;

        let journeys = rank_journeys(journeys, self.config.max_results);

        tracing::debug!(
            origin = %request.origin,
            destination = %request.destination,
            time = %request.time,
            direct = direct_count,
            transfer = transfer_count,
            candidates = candidates.len(),
            returned = journeys.len(),
            "journey search complete"
        );

        Ok(SearchResult {
            journeys,
            candidates_explored: candidates.len(),
        })
    }

    /// Ranked journeys for `origin` to `destination` departing at or after
    /// `time` (`HH:MM`).
    pub fn plan_journey(
        &self,
        origin: &str,
        destination: &str,
        time: &str,
    ) -> Result<Vec<Journey>, PlanError> {
        let request = JourneyRequest::parse(origin, destination, time)?;
        Ok(self.search(&request)?.journeys)
    }

    fn lookup(&self, id: &StopId) -> Result<&'a Arc<Stop>, PlanError> {
        self.index
            .stop(id)
            .ok_or_else(|| PlanError::UnknownStop(id.clone()))
    }
}
