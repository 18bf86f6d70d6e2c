//! Per-day aggregated log records persisted as JSON documents.
//!
//! One document per calendar date, stored at `<log_dir>/<YYYY-MM-DD>.json`.
//! A record carries running totals plus an append-only list of session
//! entries; every Stop of a non-empty session folds its numbers into the
//! record for that day. Writes rewrite the whole file.
//!
//! ## Failure policy
//!
//! A missing file means "no prior record" and yields a zeroed one. A file
//! that exists but does not parse is a distinct error ([`DailyLogError::Corrupt`]):
//! the operation fails and the file is left exactly as it was. Prior totals
//! are never silently replaced by zeros.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistence failures the aggregator distinguishes.
#[derive(Debug, Error)]
pub enum DailyLogError {
    /// The file exists but is not a valid record. The offending file is
    /// left untouched.
    #[error("daily log {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode daily log: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One session's contribution to a daily record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLogEntry {
    pub user_id: i64,
    pub task_id: i64,
    /// ISO-8601 local time the session was stopped.
    pub timestamp: String,
    pub seconds: i64,
    pub inactive_seconds: i64,
}

/// The aggregate document for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DailyLogRecord {
    pub total_seconds: i64,
    pub inactive_seconds: i64,
    pub entries: Vec<DailyLogEntry>,
}

/// Loads, appends to and lists daily records under a log directory.
pub struct DailyLog {
    dir: PathBuf,
    // Serializes read-modify-write cycles when a DailyLog is shared.
    write_lock: Mutex<()>,
}

impl DailyLog {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    /// Reads the record for `date`. Missing file yields `None`; a present
    /// but unparsable file fails with [`DailyLogError::Corrupt`].
    pub fn load(&self, date: NaiveDate) -> Result<Option<DailyLogRecord>, DailyLogError> {
        let path = self.path_for(date);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let record = serde_json::from_str(&content).map_err(|source| DailyLogError::Corrupt { path, source })?;
        Ok(Some(record))
    }

    /// Folds a finished session into the record for `date` and persists it.
    ///
    /// The existing record (or a zeroed one on the first Stop of the day)
    /// gains `total`/`inactive` on its running totals and one appended
    /// entry stamped with `stopped_at`. Returns the storage path and the
    /// updated record.
    pub fn append(
        &self,
        date: NaiveDate,
        stopped_at: NaiveDateTime,
        total: i64,
        inactive: i64,
        user_id: i64,
        task_id: i64,
    ) -> Result<(PathBuf, DailyLogRecord), DailyLogError> {
        let _guard = self.write_lock.lock();
        let mut record = self.load(date)?.unwrap_or_default();
        record.total_seconds += total;
        record.inactive_seconds += inactive;
        record.entries.push(DailyLogEntry {
            user_id,
            task_id,
            timestamp: stopped_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            seconds: total,
            inactive_seconds: inactive,
        });

        let path = self.path_for(date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        Ok((path, record))
    }

    /// All persisted records, newest date first. Files that are not
    /// date-named records or that fail to parse are skipped; listing is a
    /// read-only view and never refuses over one bad file.
    pub fn list(&self) -> Result<Vec<(NaiveDate, DailyLogRecord)>> {
        let mut records = Vec::new();
        if !self.dir.exists() {
            return Ok(records);
        }
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(stem, "%Y-%m-%d") else {
                continue;
            };
            match self.load(date) {
                Ok(Some(record)) => records.push((date, record)),
                Ok(None) => {}
                Err(_) => continue,
            }
        }
        records.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(records)
    }
}
