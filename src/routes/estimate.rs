use crate::error::AppError;
use crate::models::DebugEstimateResponse;
use crate::pricing::{self, CampaignCostResult, CampaignSettings};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

/// POST /api/v1/campaign/estimate — price a campaign before launch.
/// Total over any input shape: missing fields default, unknown labels
/// price to the minimum charge, and no body ever produces a 500.
pub async fn estimate(
    Json(settings): Json<CampaignSettings>,
) -> Result<Json<CampaignCostResult>, AppError> {
    let result = pricing::estimate_campaign_cost(&settings);
    tracing::info!(
        channel = %result.channel,
        leads = result.leads_targeted,
        credits = pricing::estimated_credits_of(&result),
        "campaign estimate"
    );
    Ok(Json(result))
}

/// POST /api/v1/campaign/estimate/debug — same computation, full dump for
/// the inspection panel.
pub async fn estimate_debug(
    State(state): State<AppState>,
    Json(settings): Json<CampaignSettings>,
) -> Result<Json<DebugEstimateResponse>, AppError> {
    let estimate = pricing::estimate_with_trace(&state.catalog, &settings);
    let total_display = pricing::format_currency(estimate.result.total_cost);

    Ok(Json(DebugEstimateResponse {
        settings: estimate.settings,
        result: estimate.result,
        trace: estimate.trace,
        total_display,
    }))
}
