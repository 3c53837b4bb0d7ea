//! Excuse history: in-memory session list + append-only daily log.
//!
//! Generated excuses are appended to an unbounded in-memory list owned by a
//! [`Session`] and, on request, persisted to disk in NDJSON format (one JSON
//! object per line), one file per calendar day:
//! `history_<YYYYMMDD>.jsonl` under the session's history directory.
//!
//! # Record Format
//!
//! Each record is a JSON object with exactly two fields:
//! - `timestamp`: ISO-8601 local time, no timezone suffix
//! - `text`: the generated excuse, UTF-8 with non-ASCII preserved
//!
//! Persistence is best-effort logging, not a durability guarantee: the file
//! is opened, appended, and closed within one `persist` call, failures
//! propagate to the caller, and nothing is retried.

use crate::error::{AlibiError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default history directory, relative to the working directory.
pub const DEFAULT_HISTORY_DIR: &str = ".history";

/// One persisted excuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Local wall-clock time the excuse was persisted.
    pub timestamp: NaiveDateTime,

    /// The generated excuse text.
    pub text: String,
}

impl HistoryRecord {
    /// Create a record stamped with the current local time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            text: text.into(),
        }
    }

    /// Serialize the record to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            AlibiError::PersistError(format!("failed to serialize history record: {}", e))
        })
    }
}

/// Log file name for a calendar day.
pub fn day_file_name(date: NaiveDate) -> String {
    format!("history_{}.jsonl", date.format("%Y%m%d"))
}

/// Append one record to the day's log file under `dir`.
///
/// Creates the directory if absent. The file handle is scoped to this call.
pub fn append_record<P: AsRef<Path>>(dir: P, record: &HistoryRecord) -> Result<()> {
    let dir = dir.as_ref();

    fs::create_dir_all(dir).map_err(|e| {
        AlibiError::PersistError(format!(
            "failed to create history directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(day_file_name(record.timestamp.date()));
    let line = record.to_ndjson_line()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| {
            AlibiError::PersistError(format!(
                "failed to open history file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line).map_err(|e| {
        AlibiError::PersistError(format!(
            "failed to append to history file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read back a day's records in append order.
///
/// A missing file is an empty day, not an error; an unreadable or
/// unparseable file propagates as a persistence error.
pub fn read_day<P: AsRef<Path>>(dir: P, date: NaiveDate) -> Result<Vec<HistoryRecord>> {
    let path = dir.as_ref().join(day_file_name(date));
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        AlibiError::PersistError(format!(
            "failed to read history file '{}': {}",
            path.display(),
            e
        ))
    })?;

    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| {
                AlibiError::PersistError(format!(
                    "malformed record in history file '{}': {}",
                    path.display(),
                    e
                ))
            })
        })
        .collect()
}

/// One interactive session: the in-memory excuse history and the directory
/// excuses are persisted to.
///
/// Explicit session state instead of process globals keeps the core
/// side-effect-free except for [`Session::persist`].
#[derive(Debug, Clone)]
pub struct Session {
    history_dir: PathBuf,
    entries: Vec<String>,
}

impl Session {
    /// Create a session persisting under the given directory.
    pub fn new<P: Into<PathBuf>>(history_dir: P) -> Self {
        Self {
            history_dir: history_dir.into(),
            entries: Vec::new(),
        }
    }

    /// The directory daily log files are written to.
    pub fn history_dir(&self) -> &Path {
        &self.history_dir
    }

    /// Append a generated excuse to the in-memory history.
    ///
    /// The list is ordered by call and unbounded; it lives as long as the
    /// session.
    pub fn record(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    /// The in-memory history, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append one excuse to today's log file.
    pub fn persist(&self, text: &str) -> Result<()> {
        append_record(&self.history_dir, &HistoryRecord::new(text))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn day_file_name_uses_compact_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert_eq!(day_file_name(date), "history_20260803.jsonl");
    }

    #[test]
    fn persist_round_trips_records_in_call_order() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path());

        let texts = ["first excuse", "second excuse", "third excuse"];
        for text in texts {
            session.persist(text).unwrap();
        }

        let today = Local::now().date_naive();
        let records = read_day(dir.path(), today).unwrap();
        assert_eq!(records.len(), 3);
        for (record, text) in records.iter().zip(texts) {
            assert!(!record.text.is_empty());
            assert_eq!(record.text, text);
        }
    }

    #[test]
    fn persist_creates_the_history_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("history");
        let session = Session::new(&nested);

        session.persist("made it").unwrap();
        assert!(nested.join(day_file_name(Local::now().date_naive())).exists());
    }

    #[test]
    fn records_preserve_unicode_text() {
        let dir = TempDir::new().unwrap();
        let session = Session::new(dir.path());

        session.persist("café closed — déjà vu 🎉").unwrap();

        let records = read_day(dir.path(), Local::now().date_naive()).unwrap();
        assert_eq!(records[0].text, "café closed — déjà vu 🎉");
    }

    #[test]
    fn record_serializes_exactly_timestamp_and_text() {
        let record = HistoryRecord {
            timestamp: NaiveDate::from_ymd_opt(2026, 8, 3)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            text: "running late".to_string(),
        };
        let line = record.to_ndjson_line().unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["text"], "running late");
        assert_eq!(object["timestamp"], "2026-08-03T09:30:00");
    }

    #[test]
    fn read_day_of_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        assert!(read_day(dir.path(), date).unwrap().is_empty());
    }

    #[test]
    fn read_day_rejects_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        fs::write(dir.path().join(day_file_name(date)), "not json\n").unwrap();
        assert!(read_day(dir.path(), date).is_err());
    }

    #[test]
    fn session_records_in_memory_in_call_order() {
        let mut session = Session::default();
        session.record("one");
        session.record("two");
        assert_eq!(session.entries(), ["one", "two"]);
        assert_eq!(session.history_dir(), Path::new(DEFAULT_HISTORY_DIR));
    }

    #[test]
    fn persist_into_unwritable_location_surfaces_an_error() {
        let dir = TempDir::new().unwrap();
        // A file standing where the history directory should be.
        let blocked = dir.path().join("occupied");
        fs::write(&blocked, "file, not a directory").unwrap();

        let session = Session::new(&blocked);
        assert!(session.persist("doomed").is_err());
    }
}
