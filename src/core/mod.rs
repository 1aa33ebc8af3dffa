//! Core module - duration grammar, periods, record types and aggregation

mod aggregator;
mod duration;
mod period;
mod types;

pub(crate) use aggregator::calculate_stats;
pub(crate) use duration::parse_duration;
pub(crate) use period::Period;
pub(crate) use types::{DateFilter, LoadResult, SessionRecord, StatsSummary};
