//! Domain error types.
//!
//! These errors represent invariant violations when assembling derived
//! journey values. They are distinct from input and IO errors.

use super::StopId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., alight before board)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Consecutive legs don't meet at the same stop
    #[error("legs do not connect: arrive at {0}, depart from {1}")]
    LegsNotConnected(StopId, StopId),
}
