// src/core/net.rs

// One GET per run, no retries. The timeout bounds the whole request so a
// hung server cannot outlive the scheduling interval.

use std::time::Duration;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("govuk_scrape/", env!("CARGO_PKG_VERSION"));

fn network(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Network { url: url.to_string(), source }
}

/// Perform an HTTP GET and return the response body as a String.
///
/// Fails on transport errors and on any non-2xx status, before the body is
/// looked at. Some historical revisions parsed first and checked the status
/// after; a partial error body is not worth scraping.
pub fn http_get(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| network(url, e))?;

    let resp = client.get(url).send().map_err(|e| network(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    resp.text().map_err(|e| network(url, e))
}
