// src/store.rs

use std::{error::Error, fs, io, path::Path};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::WriteError;
use crate::file;

/// One timestamped count observation. The only persisted entity.
///
/// Serialized as one JSON object per log line:
/// `{"time":"2024-03-01 06:00:00","count":96269}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub time: String,
    pub count: u64,
}

impl LogRecord {
    /// Record `count` as observed now; timestamp rendered with `fmt`
    /// (chrono strftime syntax).
    pub fn now(count: u64, fmt: &str) -> Self {
        Self {
            time: Local::now().format(fmt).to_string(),
            count,
        }
    }
}

/// Append `record` as one JSON line to `path`, creating missing parent
/// directories. Existing lines are never touched.
pub fn append_record(path: &Path, record: &LogRecord) -> Result<(), WriteError> {
    let write_error = |source| WriteError { path: path.to_path_buf(), source };

    let line = serde_json::to_string(record).map_err(|e| write_error(io::Error::other(e)))?;
    file::append_line(path, &line).map_err(write_error)
}

/// Load every record from `path`, in file order.
///
/// Strict: a malformed line is an error, not a skip, so consumers notice a
/// corrupted log instead of charting a silently thinner series.
pub fn load_records(path: &Path) -> Result<Vec<LogRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;

    let mut records = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: LogRecord = serde_json::from_str(line)
            .map_err(|e| format!("{}:{}: {e}", path.display(), n + 1))?;
        records.push(record);
    }
    Ok(records)
}
