// src/config/consts.rs

// Net
pub const GOV_URL: &str = "https://www.gov.uk/search/research-and-statistics";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Stats log
pub const DEFAULT_LOG_FILE: &str = "data/govuk_stats_log.json";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Chart
pub const DEFAULT_PLOTS_DIR: &str = "plots";
pub const PLOT_FILENAME: &str = "statistics.svg";
