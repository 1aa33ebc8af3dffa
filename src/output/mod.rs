mod format;
mod stats;
mod status;

pub(crate) use stats::{StatsTableOptions, output_stats_json, print_stats_table};
pub(crate) use status::{output_status_json, reset_message, status_message};
