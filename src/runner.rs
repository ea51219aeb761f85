// src/runner.rs

use std::path::PathBuf;

use crate::config::Settings;
use crate::error::RunError;
use crate::plot;
use crate::scrape::stats;
use crate::store::{self, LogRecord};

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub count: u64,
    pub logged_to: PathBuf,
}

/// One fetch → extract → append cycle.
///
/// Honest about failure so tests and callers can see it; errors are logged
/// and dropped at the CLI boundary, not here. Exactly one record is appended
/// per successful run and none on any failure. The chart step runs after the
/// append and is isolated: a render failure never fails the run.
pub fn run(settings: &Settings) -> Result<RunSummary, RunError> {
    logf!("Fetching {}", settings.url);
    let count = stats::fetch_count(settings)?;
    logf!("Current statistics count: {count}");

    let record = LogRecord::now(count, &settings.datetime_format);
    store::append_record(&settings.logfile, &record)?;
    logf!("Appended {} @ {} to {}", record.count, record.time, settings.logfile.display());

    match plot::render(settings) {
        Ok(path) => logf!("Chart written to {}", path.display()),
        Err(e) => loge!("Chart render failed: {e}"),
    }

    Ok(RunSummary {
        count,
        logged_to: settings.logfile.clone(),
    })
}
