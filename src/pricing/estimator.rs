use serde::Serialize;
use std::sync::OnceLock;

use crate::pricing::attempts::{estimate_attempts, AttemptEstimate};
use crate::pricing::catalog::{RateCatalog, RatePlanEntry};
use crate::pricing::channels::{channel_cost, ChannelOutcome};
use crate::pricing::credits::to_billable_credits;
use crate::pricing::duration::{resolve_window, ResolvedWindow};
use crate::pricing::features::feature_surcharge;
use crate::pricing::settings::{CampaignSettings, ChannelKind, ResolvedSettings};

/// Minimum charge per lead when a campaign otherwise prices to zero.
const MINIMUM_CHARGE_PER_LEAD: f64 = 0.01;
/// Reported margin when no rate-plan entry matched.
const FALLBACK_MARGIN: f64 = 0.85;

/// The estimate shown to the user before launch. A pure value: no identity,
/// no lifecycle beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignCostResult {
    pub campaign_name: String,
    pub channel: String,
    pub leads_targeted: i64,
    pub total_days: i64,
    pub total_attempts: f64,
    pub call_cost: f64,
    pub text_cost: f64,
    pub social_cost: f64,
    pub direct_mail_cost: f64,
    pub feature_surcharge: f64,
    pub total_cost: f64,
    pub total_billable_credits: i64,
    pub plan_tier: String,
    pub margin: f64,
    pub agents_available: i64,
}

/// Intermediate quantities of one estimation run, for the debug panel and
/// for tests that assert on the arithmetic rather than the final total.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateTrace {
    pub total_days: i64,
    pub weekend_days_excluded: i64,
    pub avg_daily_attempts: f64,
    pub max_possible_attempts: f64,
    pub max_daily_limited_attempts: f64,
    pub total_attempts: f64,
    pub channel_cost: f64,
    pub matched_rate: Option<RatePlanEntry>,
    pub feature_surcharge: f64,
    pub minimum_charge_floor_applied: bool,
}

/// One estimation run: the fully resolved inputs, the result, and the trace.
#[derive(Debug, Clone, Serialize)]
pub struct Estimate {
    pub settings: ResolvedSettings,
    pub result: CampaignCostResult,
    pub trace: EstimateTrace,
}

/// Estimate against the compiled-in rate catalog. The sole business entry
/// point for callers that do not hold a catalog of their own.
pub fn estimate_campaign_cost(settings: &CampaignSettings) -> CampaignCostResult {
    estimate_with_trace(shared_catalog(), settings).result
}

/// Full estimation pipeline. Total over every input shape: defaults absorb
/// missing fields and unknown labels fall back to zero-cost entries, so no
/// branch returns an error.
pub fn estimate_with_trace(catalog: &RateCatalog, settings: &CampaignSettings) -> Estimate {
    let resolved = ResolvedSettings::from_settings(settings);

    let window: ResolvedWindow = resolve_window(&resolved);
    let attempts: AttemptEstimate = estimate_attempts(
        resolved.lead_count,
        resolved.min_daily_attempts,
        resolved.max_daily_attempts,
        resolved.daily_attempt_limit,
        window.total_days,
    );

    let outcome: ChannelOutcome = channel_cost(catalog, &resolved, attempts.total_attempts);
    let surcharge = feature_surcharge(catalog, &resolved);

    let mut total_cost = outcome.cost + surcharge;

    // Minimum-charge floor: an unrecognized channel or zero-rate plan still
    // bills a cent per lead. Applied after surcharges.
    let floor_applied = total_cost == 0.0 && resolved.lead_count > 0;
    if floor_applied {
        total_cost = resolved.lead_count as f64 * MINIMUM_CHARGE_PER_LEAD;
    }

    let margin = outcome
        .matched_rate
        .map(|rate| rate.margin)
        .unwrap_or(FALLBACK_MARGIN);

    let (call_cost, text_cost, social_cost, direct_mail_cost) = match resolved.channel {
        ChannelKind::Call => (outcome.cost, 0.0, 0.0, 0.0),
        ChannelKind::Text => (0.0, outcome.cost, 0.0, 0.0),
        ChannelKind::Social => (0.0, 0.0, outcome.cost, 0.0),
        ChannelKind::DirectMail => (0.0, 0.0, 0.0, outcome.cost),
        ChannelKind::Other => (0.0, 0.0, 0.0, 0.0),
    };

    let result = CampaignCostResult {
        campaign_name: resolved.campaign_name.clone(),
        channel: resolved.channel_label.clone(),
        leads_targeted: resolved.lead_count,
        total_days: window.total_days,
        total_attempts: attempts.total_attempts,
        call_cost,
        text_cost,
        social_cost,
        direct_mail_cost,
        feature_surcharge: surcharge,
        total_cost,
        total_billable_credits: to_billable_credits(total_cost),
        plan_tier: resolved.plan_tier_label.clone(),
        margin,
        agents_available: resolved.available_agents,
    };

    let trace = EstimateTrace {
        total_days: window.total_days,
        weekend_days_excluded: window.weekend_days_excluded,
        avg_daily_attempts: attempts.avg_daily_attempts,
        max_possible_attempts: attempts.max_possible_attempts,
        max_daily_limited_attempts: attempts.max_daily_limited_attempts,
        total_attempts: attempts.total_attempts,
        channel_cost: outcome.cost,
        matched_rate: outcome.matched_rate,
        feature_surcharge: surcharge,
        minimum_charge_floor_applied: floor_applied,
    };

    Estimate {
        settings: resolved,
        result,
        trace,
    }
}

/// Catalog shared by the single-argument entry point. Built on first use,
/// read-only afterwards.
pub fn shared_catalog() -> &'static RateCatalog {
    static CATALOG: OnceLock<RateCatalog> = OnceLock::new();
    CATALOG.get_or_init(RateCatalog::standard)
}
