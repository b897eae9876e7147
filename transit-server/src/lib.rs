//! Transit journey planner server.
//!
//! A web application that answers: "how do I get from this stop to that
//! one, leaving after this time?" over a static GTFS-style schedule,
//! riding straight through or changing once.

pub mod config;
pub mod domain;
pub mod geo;
pub mod planner;
pub mod schedule;
pub mod web;
