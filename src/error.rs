// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Network-level failure: transport errors (connect, timeout, TLS) or a
/// non-2xx status. Surfaced before any of the body is looked at.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// The response body was not recognizable markup.
#[derive(Debug, Error)]
#[error("unparseable page: {reason}")]
pub struct ParseError {
    pub reason: &'static str,
}

/// Every extraction strategy came up empty.
#[derive(Debug, Error)]
#[error("no count found")]
pub struct ExtractionError;

/// The append to the stats log failed.
#[derive(Debug, Error)]
#[error("failed to append to {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Anything a single scrape-and-log run can fail with.
///
/// The run function returns this honestly; swallowing happens at the CLI
/// boundary only.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
