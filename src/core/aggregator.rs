//! Summing session records over a date window

use crate::consts::MINUTES_PER_POMODORO;
use crate::core::{DateFilter, SessionRecord, StatsSummary};

/// Aggregate records that fall inside `filter` (both ends inclusive)
pub(crate) fn calculate_stats(records: &[SessionRecord], filter: &DateFilter) -> StatsSummary {
    let mut days: Vec<SessionRecord> = records
        .iter()
        .filter(|r| filter.contains(r.date))
        .copied()
        .collect();
    days.sort_by_key(|r| r.date);

    // Stored counts are unbounded text; totals saturate instead of wrapping
    let total_pomodoros = days
        .iter()
        .fold(0_i64, |acc, r| acc.saturating_add(r.count));
    let days_active = days.len();
    let daily_average = if days_active > 0 {
        total_pomodoros as f64 / days_active as f64
    } else {
        0.0
    };

    StatsSummary {
        since: filter.since,
        until: filter.until,
        total_pomodoros,
        total_minutes: total_pomodoros.saturating_mul(MINUTES_PER_POMODORO),
        days_active,
        daily_average,
        days,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample() -> Vec<SessionRecord> {
        vec![
            SessionRecord::new(d(2025, 1, 10), 2),
            SessionRecord::new(d(2025, 1, 1), 3),
            SessionRecord::new(d(2025, 1, 2), 5),
        ]
    }

    #[test]
    fn sums_records_inside_window() {
        let filter = DateFilter::new(Some(d(2025, 1, 1)), Some(d(2025, 1, 2)));
        let s = calculate_stats(&sample(), &filter);
        assert_eq!(s.total_pomodoros, 8);
        assert_eq!(s.days_active, 2);
        assert_eq!(s.daily_average, 4.0);
        assert_eq!(s.total_minutes, 200);
    }

    #[test]
    fn unbounded_window_takes_everything_sorted() {
        let s = calculate_stats(&sample(), &DateFilter::default());
        assert_eq!(s.total_pomodoros, 10);
        assert_eq!(s.days_active, 3);
        let dates: Vec<_> = s.days.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2025, 1, 1), d(2025, 1, 2), d(2025, 1, 10)]);
    }

    #[test]
    fn empty_window_has_zero_average() {
        let filter = DateFilter::new(Some(d(2024, 1, 1)), Some(d(2024, 12, 31)));
        let s = calculate_stats(&sample(), &filter);
        assert_eq!(s.total_pomodoros, 0);
        assert_eq!(s.days_active, 0);
        assert_eq!(s.daily_average, 0.0);
        assert_eq!(s.total_minutes, 0);
    }

    #[test]
    fn zero_count_day_still_counts_as_active() {
        // a reset day keeps its file with count 0
        let records = vec![
            SessionRecord::new(d(2025, 1, 1), 0),
            SessionRecord::new(d(2025, 1, 2), 4),
        ];
        let s = calculate_stats(&records, &DateFilter::default());
        assert_eq!(s.days_active, 2);
        assert_eq!(s.daily_average, 2.0);
    }

    #[test]
    fn huge_counts_saturate() {
        let records = vec![
            SessionRecord::new(d(2025, 1, 1), 400_000_000_000_000_000),
            SessionRecord::new(d(2025, 1, 2), i64::MAX),
        ];
        let s = calculate_stats(&records, &DateFilter::default());
        assert_eq!(s.total_pomodoros, i64::MAX);
        assert_eq!(s.total_minutes, i64::MAX);

        let single = calculate_stats(&records[..1], &DateFilter::default());
        assert_eq!(single.total_pomodoros, 400_000_000_000_000_000);
        assert_eq!(single.total_minutes, i64::MAX);
    }

    #[test]
    fn carries_window_bounds() {
        let filter = DateFilter::new(None, Some(d(2025, 1, 5)));
        let s = calculate_stats(&sample(), &filter);
        assert_eq!(s.since, None);
        assert_eq!(s.until, Some(d(2025, 1, 5)));
        assert_eq!(s.total_pomodoros, 8);
    }
}
