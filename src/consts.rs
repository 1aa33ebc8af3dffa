/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minutes credited per completed pomodoro in statistics, regardless of the
/// duration the timer actually ran with
pub(crate) const MINUTES_PER_POMODORO: i64 = 25;

/// Duration used when neither the CLI nor the config file provides one
pub(crate) const DEFAULT_DURATION: &str = "25";

/// Session files are named `sessions_YYYY-MM-DD.txt`
pub(crate) const SESSION_FILE_PREFIX: &str = "sessions_";
pub(crate) const SESSION_FILE_EXT: &str = "txt";

/// Environment variable overriding the data directory
pub(crate) const POMODORO_HOME_ENV: &str = "POMODORO_HOME";

/// Default data directory under the user's home
pub(crate) const DEFAULT_DATA_DIR: &str = ".pomodoro";
