use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transit_server::config::ServerConfig;
use transit_server::planner::PlannerConfig;
use transit_server::schedule::{Schedule, ScheduleHandle, ScheduleIndex};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // Fail fast if the schedule is unavailable
    tracing::info!(path = %config.schedule_path.display(), "loading schedule");
    let path = config.schedule_path.clone();
    let index =
        tokio::task::spawn_blocking(move || Schedule::load(&path).map(ScheduleIndex::build))
            .await??;
    let schedule = ScheduleHandle::new(index);

    if let Some(interval) = config.reload_interval {
        spawn_reload(schedule.clone(), config.schedule_path.clone(), interval);
    }

    let state = AppState::new(schedule, PlannerConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "transit journey planner listening");
    tracing::info!("  GET  /health            - Health check");
    tracing::info!("  GET  /api/stops/search  - Search stops");
    tracing::info!("  POST /journey/plan      - Plan a journey");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

/// Periodically reload the schedule snapshot, keeping the old index on failure.
fn spawn_reload(schedule: ScheduleHandle, path: PathBuf, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match schedule.reload(&path).await {
                Ok(count) => tracing::info!(stops = count, "reloaded schedule"),
                Err(e) => tracing::warn!(error = %e, "failed to reload schedule, keeping previous"),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
