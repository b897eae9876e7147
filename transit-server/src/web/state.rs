//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::PlannerConfig;
use crate::schedule::ScheduleHandle;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current schedule index, swappable on reload
    pub schedule: ScheduleHandle,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(schedule: ScheduleHandle, config: PlannerConfig) -> Self {
        Self {
            schedule,
            config: Arc::new(config),
        }
    }
}
