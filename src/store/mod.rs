//! Per-day session files
//!
//! One plain-text file per calendar day under the data directory, named
//! `sessions_YYYY-MM-DD.txt` and holding the decimal completion count.

pub(crate) mod loader;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{
    DATE_FORMAT, DEFAULT_DATA_DIR, POMODORO_HOME_ENV, SESSION_FILE_EXT, SESSION_FILE_PREFIX,
};
use crate::error::AppError;

pub(crate) use loader::load_records;

/// Handle to the session directory
#[derive(Debug, Clone)]
pub(crate) struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the data directory: explicit flag, then `POMODORO_HOME`,
    /// then the config file, then `~/.pomodoro`
    pub(crate) fn resolve(
        cli_dir: Option<&Path>,
        config_dir: Option<&Path>,
    ) -> Result<Self, AppError> {
        if let Some(dir) = cli_dir {
            return Ok(Self::new(dir));
        }
        if let Ok(home) = env::var(POMODORO_HOME_ENV)
            && !home.trim().is_empty()
        {
            return Ok(Self::new(home));
        }
        if let Some(dir) = config_dir {
            return Ok(Self::new(dir));
        }
        let home = dirs::home_dir().ok_or(AppError::NoDataDir)?;
        Ok(Self::new(home.join(DEFAULT_DATA_DIR)))
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!(
            "{SESSION_FILE_PREFIX}{}.{SESSION_FILE_EXT}",
            date.format(DATE_FORMAT)
        ))
    }

    /// Stored count for `date`; missing or malformed files read as 0
    pub(crate) fn load_count(&self, date: NaiveDate) -> i64 {
        let path = self.path_for(date);
        match read_count(&path) {
            Some(count) => count,
            None => {
                if path.exists() {
                    log::debug!("Unreadable session file {}, treating as 0", path.display());
                }
                0
            }
        }
    }

    pub(crate) fn save_count(&self, date: NaiveDate, count: i64) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir).map_err(|e| AppError::io(&self.dir, e))?;
        let path = self.path_for(date);
        fs::write(&path, count.to_string()).map_err(|e| AppError::io(&path, e))?;
        log::debug!("Saved count {count} to {}", path.display());
        Ok(())
    }

    /// Increment and persist the count for `date`, returning the new value.
    /// A count already at `i64::MAX` stays there.
    pub(crate) fn increment(&self, date: NaiveDate) -> Result<i64, AppError> {
        let count = self.load_count(date).saturating_add(1);
        self.save_count(date, count)?;
        Ok(count)
    }

    pub(crate) fn reset(&self, date: NaiveDate) -> Result<(), AppError> {
        self.save_count(date, 0)
    }
}

/// Read and parse a count file, `None` if absent or not an integer
pub(crate) fn read_count(path: &Path) -> Option<i64> {
    let content = fs::read_to_string(path).ok()?;
    content.trim().parse::<i64>().ok()
}

/// Extract the date embedded in a session file name
pub(crate) fn parse_file_date(path: &Path) -> Option<NaiveDate> {
    if path.extension()?.to_str()? != SESSION_FILE_EXT {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let date_str = stem.strip_prefix(SESSION_FILE_PREFIX)?;
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).ok()
}
