//! Directory scan: discover → parse → collect

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::consts::{SESSION_FILE_EXT, SESSION_FILE_PREFIX};
use crate::core::{LoadResult, SessionRecord};
use crate::store::{SessionStore, parse_file_date, read_count};

pub(crate) fn find_session_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let pattern = format!(
        "{}/{SESSION_FILE_PREFIX}*.{SESSION_FILE_EXT}",
        glob::Pattern::escape(&dir.display().to_string())
    );
    let mut files = Vec::new();
    if let Ok(entries) = glob::glob(&pattern) {
        for entry in entries.flatten() {
            files.push(entry);
        }
    }
    files
}

fn parse_record(path: &Path) -> Option<SessionRecord> {
    let date = parse_file_date(path)?;
    let count = read_count(path)?;
    Some(SessionRecord::new(date, count))
}

/// Read every session file in the store. Files whose name or content does
/// not parse are skipped.
pub(crate) fn load_records(store: &SessionStore) -> LoadResult {
    let start = Instant::now();
    let files = find_session_files(store.dir());
    log::debug!(
        "Scanning {} session files in {}",
        files.len(),
        store.dir().display()
    );

    let parsed: Vec<(&PathBuf, Option<SessionRecord>)> =
        files.par_iter().map(|p| (p, parse_record(p))).collect();

    let mut result = LoadResult::default();
    for (path, record) in parsed {
        match record {
            Some(r) => result.records.push(r),
            None => {
                log::debug!("Skipping unparsable session file {}", path.display());
                result.skipped += 1;
            }
        }
    }
    result.records.sort_by_key(|r| r.date);
    result.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    log::debug!(
        "Loaded {} records, skipped {} ({:.2}ms)",
        result.records.len(),
        result.skipped,
        result.elapsed_ms
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let store = SessionStore::new(tmp.path().join("absent"));
        let result = load_records(&store);
        assert!(result.records.is_empty());
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn loads_valid_files_and_skips_broken_ones() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("sessions_2025-01-02.txt"), "5").unwrap();
        fs::write(dir.join("sessions_2025-01-01.txt"), "3\n").unwrap();
        fs::write(dir.join("sessions_2025-01-10.txt"), "2").unwrap();
        fs::write(dir.join("sessions_2025-01-11.txt"), "lots").unwrap();
        fs::write(dir.join("sessions_someday.txt"), "1").unwrap();
        fs::write(dir.join("notes.txt"), "not a session").unwrap();

        let result = load_records(&SessionStore::new(dir));
        assert_eq!(
            result.records,
            vec![
                SessionRecord::new(d(2025, 1, 1), 3),
                SessionRecord::new(d(2025, 1, 2), 5),
                SessionRecord::new(d(2025, 1, 10), 2),
            ]
        );
        assert_eq!(result.skipped, 2);
    }

    #[test]
    fn directory_with_glob_metacharacters() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("data [1]");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("sessions_2025-02-01.txt"), "1").unwrap();

        let files = find_session_files(&dir);
        assert_eq!(files.len(), 1);
    }
}
