// src/config/settings.rs

use std::{env, path::PathBuf, time::Duration};

use super::consts::*;

/// Resolved configuration for one run.
///
/// Built once at process start and passed by parameter from there on;
/// nothing reads the environment after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub logfile: PathBuf,
    pub datetime_format: String,
    pub plots_dir: PathBuf,
    pub plot_filename: String,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: GOV_URL.to_string(),
            logfile: PathBuf::from(DEFAULT_LOG_FILE),
            datetime_format: DATETIME_FORMAT.to_string(),
            plots_dir: PathBuf::from(DEFAULT_PLOTS_DIR),
            plot_filename: PLOT_FILENAME.to_string(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Defaults, overridden by environment variables where set:
    /// `GOV_URL`, `LOGFILE`, `DATETIME_FORMAT`, `PLOTS_DIR`.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(v) = env::var("GOV_URL") {
            settings.url = v;
        }
        if let Ok(v) = env::var("LOGFILE") {
            settings.logfile = PathBuf::from(v);
        }
        if let Ok(v) = env::var("DATETIME_FORMAT") {
            settings.datetime_format = v;
        }
        if let Ok(v) = env::var("PLOTS_DIR") {
            settings.plots_dir = PathBuf::from(v);
        }
        settings
    }

    /// Full path of the chart artifact.
    pub fn plot_path(&self) -> PathBuf {
        self.plots_dir.join(&self.plot_filename)
    }
}
