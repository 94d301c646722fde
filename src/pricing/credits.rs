use crate::pricing::estimator::CampaignCostResult;

/// One billable credit equals $0.01.
pub const CREDITS_PER_DOLLAR: f64 = 100.0;

/// Convert a monetary total into billable credits, rounding up so a
/// fraction of a cent still charges a whole credit.
pub fn to_billable_credits(total_cost: f64) -> i64 {
    (total_cost * CREDITS_PER_DOLLAR).ceil() as i64
}

/// Display helper for the UI; no business logic.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn estimated_credits_of(result: &CampaignCostResult) -> i64 {
    result.total_billable_credits
}
