use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::pricing::settings::ResolvedSettings;

/// Resolved campaign window. `weekend_days_excluded` is only ever non-zero
/// on the date-range path; the explicit day-count path never subtracts
/// weekends, whatever `include_weekends` says.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolvedWindow {
    pub total_days: i64,
    pub weekend_days_excluded: i64,
}

/// Total active campaign days.
///
/// Without a full start/end date pair this is the explicit day count from
/// the wizard (minimum 1). With both dates it is the inclusive span, minus
/// one day per Saturday/Sunday when weekend outreach is off. The subtracted
/// span is not floored: an end date before the start date produces a
/// non-positive total that flows into the attempt math unchanged.
pub fn resolve_window(settings: &ResolvedSettings) -> ResolvedWindow {
    let (Some(start), Some(end)) = (settings.start_date, settings.end_date) else {
        return ResolvedWindow {
            total_days: settings.days_selected.max(1),
            weekend_days_excluded: 0,
        };
    };

    let span = (end - start).num_days() + 1;
    let excluded = if settings.include_weekends {
        0
    } else {
        weekend_days_between(start, end)
    };

    ResolvedWindow {
        total_days: span - excluded,
        weekend_days_excluded: excluded,
    }
}

fn weekend_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut count = 0;
    let mut day = start;
    while day <= end {
        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::settings::{CampaignSettings, ResolvedSettings};

    fn resolved(settings: CampaignSettings) -> ResolvedSettings {
        ResolvedSettings::from_settings(&settings)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_count_path_uses_days_selected() {
        let window = resolve_window(&resolved(CampaignSettings {
            days_selected: Some(5),
            ..Default::default()
        }));
        assert_eq!(window.total_days, 5);
        assert_eq!(window.weekend_days_excluded, 0);
    }

    #[test]
    fn day_count_path_has_a_floor_of_one() {
        let window = resolve_window(&resolved(CampaignSettings::default()));
        assert_eq!(window.total_days, 1);
    }

    #[test]
    fn date_range_is_inclusive_of_both_endpoints() {
        // Mon 2025-06-02 through Fri 2025-06-06: five weekdays.
        let window = resolve_window(&resolved(CampaignSettings {
            start_date: Some(date(2025, 6, 2)),
            end_date: Some(date(2025, 6, 6)),
            include_weekends: Some(true),
            ..Default::default()
        }));
        assert_eq!(window.total_days, 5);
    }

    #[test]
    fn weekends_are_subtracted_when_disabled() {
        // Mon 2025-06-02 through Mon 2025-06-09: 8 calendar days, one weekend.
        let window = resolve_window(&resolved(CampaignSettings {
            start_date: Some(date(2025, 6, 2)),
            end_date: Some(date(2025, 6, 9)),
            include_weekends: Some(false),
            ..Default::default()
        }));
        assert_eq!(window.total_days, 6);
        assert_eq!(window.weekend_days_excluded, 2);
    }

    #[test]
    fn weekends_stay_when_enabled() {
        let window = resolve_window(&resolved(CampaignSettings {
            start_date: Some(date(2025, 6, 2)),
            end_date: Some(date(2025, 6, 9)),
            include_weekends: Some(true),
            ..Default::default()
        }));
        assert_eq!(window.total_days, 8);
    }

    #[test]
    fn weekend_subtraction_never_touches_the_day_count_path() {
        let window = resolve_window(&resolved(CampaignSettings {
            days_selected: Some(14),
            include_weekends: Some(false),
            ..Default::default()
        }));
        assert_eq!(window.total_days, 14);
        assert_eq!(window.weekend_days_excluded, 0);
    }

    #[test]
    fn weekend_only_range_can_collapse_to_zero_days() {
        // Sat 2025-06-07 through Sun 2025-06-08 with weekends off.
        let window = resolve_window(&resolved(CampaignSettings {
            start_date: Some(date(2025, 6, 7)),
            end_date: Some(date(2025, 6, 8)),
            ..Default::default()
        }));
        assert_eq!(window.total_days, 0);
    }

    #[test]
    fn inverted_date_range_goes_non_positive() {
        let window = resolve_window(&resolved(CampaignSettings {
            start_date: Some(date(2025, 6, 9)),
            end_date: Some(date(2025, 6, 2)),
            ..Default::default()
        }));
        assert_eq!(window.total_days, -6);
        assert_eq!(window.weekend_days_excluded, 0);
    }
}
