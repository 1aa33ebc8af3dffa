use chrono::{Duration, NaiveDate};

use crate::core::DateFilter;
use crate::error::AppError;
use crate::utils::parse_date;

/// Named or explicit date range for statistics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Period {
    Today,
    /// Last 7 days including today
    Week,
    /// Last 30 days including today
    Month,
    All,
    Range(NaiveDate, NaiveDate),
}

impl Period {
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        let period = match trimmed.to_ascii_lowercase().as_str() {
            "today" => Period::Today,
            "week" => Period::Week,
            "month" => Period::Month,
            "all" => Period::All,
            _ => {
                let invalid = || AppError::InvalidPeriod {
                    input: trimmed.to_string(),
                };
                let (start, end) = trimmed.split_once(':').ok_or_else(invalid)?;
                let start = parse_date(start).map_err(|_| invalid())?;
                let end = parse_date(end).map_err(|_| invalid())?;
                Period::Range(start, end)
            }
        };
        Ok(period)
    }

    /// Resolve into an inclusive date window relative to `today`
    pub(crate) fn to_filter(self, today: NaiveDate) -> DateFilter {
        match self {
            Period::Today => DateFilter::new(Some(today), Some(today)),
            Period::Week => DateFilter::new(Some(today - Duration::days(6)), Some(today)),
            Period::Month => DateFilter::new(Some(today - Duration::days(29)), Some(today)),
            Period::All => DateFilter::new(None, Some(today)),
            Period::Range(start, end) => DateFilter::new(Some(start), Some(end)),
        }
    }

    pub(crate) fn label(self) -> String {
        match self {
            Period::Today => "Today".to_string(),
            Period::Week => "Last 7 days".to_string(),
            Period::Month => "Last 30 days".to_string(),
            Period::All => "All time".to_string(),
            Period::Range(start, end) => format!("{start} to {end}"),
        }
    }
}
