//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::DEFAULT_DURATION;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pomodoro")]
#[command(about = "🍅 Pomodoro CLI Timer - A full-screen countdown timer", version)]
#[command(after_help = "Examples:
  pomodoro 25        Start a 25-minute timer
  pomodoro 25m       Start a 25-minute timer
  pomodoro 1h        Start a 1-hour timer
  pomodoro 1h30m     Start a 1 hour 30 minute timer
  pomodoro 90s       Start a 90-second timer (rounded down to 1 minute)
  pomodoro --stats week
  pomodoro --stats 2025-01-01:2025-01-31")]
#[command(group(ArgGroup::new("action").args(["reset", "status", "stats"]).multiple(false)))]
#[command(group(ArgGroup::new("report").args(["status", "stats"]).multiple(false)))]
pub(crate) struct Cli {
    /// Timer duration (default: 25 minutes). Examples: 25, 25m, 1h, 1h30m
    pub(crate) duration: Option<String>,

    /// Reset today's pomodoro count
    #[arg(long)]
    pub(crate) reset: bool,

    /// Show today's pomodoro count and exit
    #[arg(long)]
    pub(crate) status: bool,

    /// Show statistics: today, week, month, all, or YYYY-MM-DD:YYYY-MM-DD
    #[arg(long, value_name = "PERIOD", num_args = 0..=1, default_missing_value = "all")]
    pub(crate) stats: Option<String>,

    /// Output --status or --stats as JSON (only with --status or --stats)
    #[arg(short, long, requires = "report")]
    pub(crate) json: bool,

    /// Show one row per day (only with --stats)
    #[arg(short, long, requires = "stats")]
    pub(crate) breakdown: bool,

    /// Directory holding the per-day session files (default: ~/.pomodoro)
    #[arg(long, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Timezone deciding which day is "today" (e.g., "UTC", "Europe/Berlin")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence).
    /// `data_dir` is left alone: `POMODORO_HOME` sits between the flag and
    /// the config file, see `SessionStore::resolve`.
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Only override the color mode if CLI is at default
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.duration.is_none() {
            self.duration = config.default_duration.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn duration_or_default(&self) -> &str {
        self.duration.as_deref().unwrap_or(DEFAULT_DURATION)
    }
}
