//! Search configuration for the journey planner.

/// Configuration parameters for journey search.
///
/// The candidate and result caps bound the work a single query can do;
/// they are tuning constants, not derived from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Maximum number of journeys to return.
    pub max_results: usize,

    /// Maximum number of stops tried as transfer points.
    pub max_transfer_candidates: usize,

    /// Maximum number of transfer journeys kept before ranking.
    pub max_transfer_results: usize,

    /// A non-interchange stop is a transfer candidate only if it lies
    /// within this distance of both origin and destination (km, exclusive).
    pub transfer_radius_km: f64,

    /// Minimum wait between arriving and departing at the transfer stop.
    pub min_transfer_mins: i64,

    /// Maximum wait between arriving and departing at the transfer stop.
    pub max_transfer_mins: i64,

    /// Nominal walking time added to transfer journeys.
    pub transfer_allowance_mins: u32,
}

impl PlannerConfig {
    /// Returns true if a wait of `gap_mins` is an acceptable connection.
    pub fn accepts_connection(&self, gap_mins: i64) -> bool {
        (self.min_transfer_mins..=self.max_transfer_mins).contains(&gap_mins)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            max_transfer_candidates: 10,
            max_transfer_results: 3,
            transfer_radius_km: 10.0,
            min_transfer_mins: 10,
            max_transfer_mins: 60,
            transfer_allowance_mins: 10,
        }
    }
}
