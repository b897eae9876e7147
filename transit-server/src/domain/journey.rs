//! Journey types.
//!
//! A `Journey` is a complete itinerary from origin to destination: either a
//! single direct leg, or two legs joined at a transfer stop.

use std::sync::Arc;

use super::{DomainError, RouteLeg, ScheduleTime, Stop};
use crate::geo::round_km;

/// A complete itinerary.
///
/// # Invariants
///
/// - One or two legs
/// - `transfer_count() == legs().len() - 1`
/// - With two legs, the first alights where the second boards
#[derive(Debug, Clone)]
pub struct Journey {
    legs: Vec<RouteLeg>,
    transfer_mins: u32,
}

impl Journey {
    /// A journey made of a single leg.
    pub fn direct(leg: RouteLeg) -> Self {
        Self {
            legs: vec![leg],
            transfer_mins: 0,
        }
    }

    /// A journey changing once at the stop shared by both legs.
    ///
    /// `transfer_mins` is the nominal allowance counted towards the total
    /// duration, not the actual wait between the legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the first leg does not alight where the second boards.
    pub fn with_transfer(
        first: RouteLeg,
        second: RouteLeg,
        transfer_mins: u32,
    ) -> Result<Self, DomainError> {
        let arrive = &first.destination().id;
        let depart = &second.origin().id;
        if arrive != depart {
            return Err(DomainError::LegsNotConnected(arrive.clone(), depart.clone()));
        }

        Ok(Self {
            legs: vec![first, second],
            transfer_mins,
        })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    fn first_leg(&self) -> &RouteLeg {
        // Safe: never constructed empty
        &self.legs[0]
    }

    fn last_leg(&self) -> &RouteLeg {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the stop the journey starts from.
    pub fn origin(&self) -> &Arc<Stop> {
        self.first_leg().origin()
    }

    /// Returns the stop the journey ends at.
    pub fn destination(&self) -> &Arc<Stop> {
        self.last_leg().destination()
    }

    /// Returns the transfer stop, if any.
    pub fn transfer_stop(&self) -> Option<&Arc<Stop>> {
        self.legs.get(1).map(|leg| leg.origin())
    }

    /// Departure time of the first leg.
    pub fn departure_time(&self) -> ScheduleTime {
        self.first_leg().departure_time()
    }

    /// Arrival time of the last leg.
    pub fn arrival_time(&self) -> ScheduleTime {
        self.last_leg().arrival_time()
    }

    /// Sum of leg durations plus the nominal transfer allowance.
    pub fn total_duration_mins(&self) -> u32 {
        self.legs.iter().map(RouteLeg::duration_mins).sum::<u32>() + self.transfer_mins
    }

    /// Sum of leg distances, rounded to two decimals.
    pub fn total_distance_km(&self) -> f64 {
        round_km(self.legs.iter().map(RouteLeg::distance_km).sum())
    }

    /// Number of changes between vehicles.
    pub fn transfer_count(&self) -> usize {
        self.legs.len() - 1
    }

    /// Minutes allowed for walking between vehicles.
    pub fn walking_mins(&self) -> u32 {
        self.transfer_mins
    }

    /// Actual wait between the legs, for transfer journeys.
    pub fn connection_gap_mins(&self) -> Option<i64> {
        let second = self.legs.get(1)?;
        Some(
            self.first_leg()
                .arrival_time()
                .minutes_until(second.departure_time()),
        )
    }

    /// Returns true if this journey has no transfer.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }
}
