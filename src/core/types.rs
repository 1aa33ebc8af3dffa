//! Core data types shared by the store, the aggregator and the output layer

use chrono::NaiveDate;
use serde::Serialize;

/// One day's stored completion count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct SessionRecord {
    pub(crate) date: NaiveDate,
    pub(crate) count: i64,
}

impl SessionRecord {
    pub(crate) fn new(date: NaiveDate, count: i64) -> Self {
        Self { date, count }
    }
}

/// Date filter for queries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}

/// Aggregate over a date window. Derived, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct StatsSummary {
    pub(crate) since: Option<NaiveDate>,
    pub(crate) until: Option<NaiveDate>,
    pub(crate) total_pomodoros: i64,
    pub(crate) total_minutes: i64,
    pub(crate) days_active: usize,
    pub(crate) daily_average: f64,
    /// Matching records, oldest first
    #[serde(skip)]
    pub(crate) days: Vec<SessionRecord>,
}

/// Result of scanning the session directory
#[derive(Debug, Default)]
pub(crate) struct LoadResult {
    pub(crate) records: Vec<SessionRecord>,
    /// Files that matched the naming pattern but could not be parsed
    pub(crate) skipped: usize,
    /// Processing time in milliseconds
    pub(crate) elapsed_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn date_filter_no_bounds() {
        let f = DateFilter::new(None, None);
        assert!(f.contains(d(2020, 1, 1)));
        assert!(f.contains(d(2099, 12, 31)));
    }

    #[test]
    fn date_filter_since_only() {
        let f = DateFilter::new(Some(d(2025, 6, 1)), None);
        assert!(!f.contains(d(2025, 5, 31)));
        assert!(f.contains(d(2025, 6, 1))); // inclusive
        assert!(f.contains(d(2025, 6, 2)));
    }

    #[test]
    fn date_filter_until_only() {
        let f = DateFilter::new(None, Some(d(2025, 6, 30)));
        assert!(f.contains(d(2025, 6, 30))); // inclusive
        assert!(!f.contains(d(2025, 7, 1)));
    }

    #[test]
    fn date_filter_single_day_range() {
        let f = DateFilter::new(Some(d(2025, 1, 15)), Some(d(2025, 1, 15)));
        assert!(!f.contains(d(2025, 1, 14)));
        assert!(f.contains(d(2025, 1, 15)));
        assert!(!f.contains(d(2025, 1, 16)));
    }

    #[test]
    fn summary_json_omits_day_list() {
        let summary = StatsSummary {
            total_pomodoros: 3,
            total_minutes: 75,
            days_active: 1,
            daily_average: 3.0,
            days: vec![SessionRecord::new(d(2025, 1, 1), 3)],
            ..Default::default()
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("days").is_none());
        assert_eq!(value["total_minutes"].as_i64(), Some(75));
        assert!(value["since"].is_null());
    }
}
