use serde::Serialize;

/// Attempt totals with the intermediate quantities the debug panel shows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AttemptEstimate {
    pub avg_daily_attempts: f64,
    pub max_possible_attempts: f64,
    pub max_daily_limited_attempts: f64,
    pub total_attempts: f64,
}

/// Total contact attempts across the campaign: the per-lead cadence average
/// capped by the global per-day ceiling. This is a capacity clamp, not a
/// day-by-day schedule — attempts are never assigned to individual days.
pub fn estimate_attempts(
    lead_count: i64,
    min_daily: i64,
    max_daily: i64,
    daily_limit: i64,
    total_days: i64,
) -> AttemptEstimate {
    let avg_daily_attempts = (min_daily + max_daily) as f64 / 2.0;
    let max_possible_attempts = lead_count as f64 * avg_daily_attempts;
    let max_daily_limited_attempts = daily_limit as f64 * total_days as f64;

    AttemptEstimate {
        avg_daily_attempts,
        max_possible_attempts,
        max_daily_limited_attempts,
        total_attempts: max_possible_attempts.min(max_daily_limited_attempts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_capacity_wins_when_below_the_daily_ceiling() {
        let estimate = estimate_attempts(100, 2, 4, 1000, 5);
        assert_eq!(estimate.avg_daily_attempts, 3.0);
        assert_eq!(estimate.max_possible_attempts, 300.0);
        assert_eq!(estimate.max_daily_limited_attempts, 5000.0);
        assert_eq!(estimate.total_attempts, 300.0);
    }

    #[test]
    fn daily_ceiling_wins_for_large_lists() {
        let estimate = estimate_attempts(10_000, 2, 4, 500, 3);
        assert_eq!(estimate.total_attempts, 1500.0);
    }

    #[test]
    fn odd_cadence_bounds_give_a_fractional_average() {
        let estimate = estimate_attempts(100, 2, 3, 1000, 5);
        assert_eq!(estimate.avg_daily_attempts, 2.5);
        assert_eq!(estimate.total_attempts, 250.0);
    }

    #[test]
    fn zero_leads_mean_zero_attempts() {
        let estimate = estimate_attempts(0, 1, 3, 1000, 7);
        assert_eq!(estimate.total_attempts, 0.0);
    }

    #[test]
    fn non_positive_days_drag_the_ceiling_down() {
        // An inverted date window produces negative limited attempts, which
        // the clamp then selects. Preserved as-is; see DESIGN.md.
        let estimate = estimate_attempts(100, 2, 4, 1000, -2);
        assert_eq!(estimate.max_daily_limited_attempts, -2000.0);
        assert_eq!(estimate.total_attempts, -2000.0);
    }
}
