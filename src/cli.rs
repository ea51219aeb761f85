// src/cli.rs

use crate::config::Settings;
use crate::runner;

/// Entry point for one scheduled scrape-and-log run.
///
/// Every failure is logged and swallowed here so a transient scrape miss
/// never surfaces as a failed unit to the external scheduler; the outcome
/// is observable in the debug log and on stderr instead.
pub fn run() {
    let settings = Settings::from_env();

    match runner::run(&settings) {
        Ok(summary) => {
            println!("Logged count {} to {}", summary.count, summary.logged_to.display());
        }
        Err(e) => {
            loge!("Run failed: {e}");
            eprintln!("Run failed: {e}");
        }
    }
}
