//! Journey planner over a static schedule.
//!
//! This module answers: "which ways are there to get from this stop to that
//! one, leaving no earlier than this time?"
//!
//! A search considers every route riding straight from origin to
//! destination, plus itineraries changing once at a bounded set of transfer
//! stops. Results are ranked by total duration.

mod config;
mod direct;
mod rank;
mod search;
mod transfer;

#[cfg(test)]
mod search_tests;

pub use config::PlannerConfig;
pub use direct::{find_direct_journeys, find_direct_legs};
pub use rank::rank_journeys;
pub use search::{JourneyRequest, PlanError, Planner, SearchResult};
pub use transfer::{find_transfer_journeys, transfer_candidates};
