//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, Timelike};
use tower_http::trace::TraceLayer;

use crate::domain::ScheduleTime;
use crate::planner::{JourneyRequest, PlanError, Planner};

use super::dto::*;
use super::state::AppState;

const DEFAULT_STOP_SEARCH_LIMIT: usize = 10;
const MAX_STOP_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops/search", get(search_stops))
        .route("/journey/plan", post(plan_journey))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stops by name, code or ID.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_STOP_SEARCH_LIMIT)
        .min(MAX_STOP_SEARCH_LIMIT);
    let index = state.schedule.current().await;

    let stops = index
        .search_stops(&req.q, limit)
        .into_iter()
        .map(|s| StopResult::from_stop(s))
        .collect();

    Json(StopSearchResponse { stops })
}

/// Plan a journey between two stops.
async fn plan_journey(
    State(state): State<AppState>,
    Json(req): Json<PlanJourneyRequest>,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    let time = match req.time.as_deref() {
        Some(t) => ScheduleTime::parse(t).map_err(PlanError::from)?,
        None => local_now(),
    };
    let request = JourneyRequest::new(req.origin.as_str(), req.destination.as_str(), time);

    let index = state.schedule.current().await;
    request.validate(&index)?;

    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        Planner::new(&index, &config).search(&request)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("planner task failed: {e}"),
    })??;

    let journeys = result
        .journeys
        .iter()
        .map(JourneyResult::from_journey)
        .collect();

    Ok(Json(PlanJourneyResponse {
        journeys,
        candidates_explored: result.candidates_explored,
    }))
}

/// The server's wall-clock time as a schedule time.
fn local_now() -> ScheduleTime {
    let now = Local::now().time();
    ScheduleTime::from_hm(now.hour(), now.minute())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::UnknownStop(_) | PlanError::SameStop(_) | PlanError::InvalidTime(_) => {
                AppError::BadRequest {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
