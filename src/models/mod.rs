use serde::Serialize;

use crate::pricing::estimator::EstimateTrace;
use crate::pricing::settings::ResolvedSettings;
use crate::pricing::CampaignCostResult;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub rate_entries: usize,
    pub uptime_seconds: u64,
}

/// Everything the inspection panel needs for one estimation run: the fully
/// resolved inputs, the result, and the intermediate arithmetic.
#[derive(Debug, Serialize)]
pub struct DebugEstimateResponse {
    pub settings: ResolvedSettings,
    pub result: CampaignCostResult,
    pub trace: EstimateTrace,
    pub total_display: String,
}
