//! What a single invocation does, derived from the flags

use super::args::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// Run the countdown with a raw duration string
    Timer { duration: String },
    Reset,
    Status,
    Stats { period: String },
}

/// Flags take precedence over the positional duration
pub(crate) fn parse_action(cli: &Cli) -> Action {
    if cli.reset {
        return Action::Reset;
    }
    if cli.status {
        return Action::Status;
    }
    if let Some(period) = &cli.stats {
        return Action::Stats {
            period: period.clone(),
        };
    }
    Action::Timer {
        duration: cli.duration_or_default().to_string(),
    }
}
