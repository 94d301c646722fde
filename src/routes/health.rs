use crate::error::AppError;
use crate::models::HealthResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

static START_TIME: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

pub fn init_start_time() {
    START_TIME.get_or_init(std::time::Instant::now);
}

/// GET /health — liveness probe plus a sanity count of loaded rates.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let uptime = START_TIME
        .get()
        .map(|t| t.elapsed().as_secs())
        .unwrap_or(0);

    Ok(Json(HealthResponse {
        status: "ok".into(),
        rate_entries: state.catalog.all_entries().len(),
        uptime_seconds: uptime,
    }))
}
