// src/scrape/stats.rs
//
// Extraction spec for the GOV.UK research-and-statistics search page.
// Exactly one number lives on that page: the total result count. The site
// has moved it around across redesigns, so extraction is an ordered
// fallback chain over the raw document; first strategy to produce a value
// wins. A strategy that doesn't match is a miss, never an error.

use crate::config::Settings;
use crate::core::{html, net, sanitize};
use crate::error::{ExtractionError, ParseError, RunError};

/// Meta tag carrying the count as a ready-to-parse integer. Most reliable:
/// no visible-text scraping involved.
const META_NAME: &str = "govuk:search-result-count";

/// Visible counter next to the search results, e.g. "96,269 results".
const SPAN_OPEN: &str = r#"<span class="js-result-count""#;

/// Pre-redesign counter element.
const LEGACY_OPEN: &str = r#"class="count""#;

/// Strategy A: `<meta name="govuk:search-result-count" content="96269">`.
/// The attribute must hold a bare integer; anything else is a miss.
fn meta_count(doc: &str) -> Option<u64> {
    let content = html::meta_content(doc, META_NAME)?;
    content.trim().parse().ok()
}

/// Strategy B: `<span class="js-result-count">96,269 results</span>`.
fn span_count(doc: &str) -> Option<u64> {
    let inner = html::slice_between_ci(doc, SPAN_OPEN, "</span>")?;
    let text = html::strip_tags(sanitize::normalize_entities(inner));
    sanitize::first_number(&text)
}

/// Strategy C: direct text of the first `class="count"` element, as the
/// page carried it before the search redesign.
fn legacy_count(doc: &str) -> Option<u64> {
    let inner = html::slice_between_ci(doc, LEGACY_OPEN, "<")?;
    sanitize::first_number(&sanitize::normalize_entities(inner))
}

/// Ordered fallback chain; first hit wins.
const STRATEGIES: [(&str, fn(&str) -> Option<u64>); 3] = [
    ("meta", meta_count),
    ("span", span_count),
    ("legacy", legacy_count),
];

fn find_count(doc: &str) -> Option<(&'static str, u64)> {
    STRATEGIES
        .iter()
        .find_map(|(name, strategy)| strategy(doc).map(|count| (*name, count)))
}

/// Run the strategy chain over an already-fetched document.
pub fn extract_count(doc: &str) -> Result<u64, ExtractionError> {
    find_count(doc).map(|(_, count)| count).ok_or(ExtractionError)
}

/// Fetch the configured page and pull the current statistics count out of it.
pub fn fetch_count(settings: &Settings) -> Result<u64, RunError> {
    let body = net::http_get(&settings.url, settings.timeout)?;

    if !html::looks_like_markup(&body) {
        return Err(ParseError { reason: "body contains no markup" }.into());
    }

    match find_count(&body) {
        Some((strategy, count)) => {
            logd!("Count {count} found via {strategy} strategy");
            Ok(count)
        }
        None => Err(ExtractionError.into()),
    }
}
