// src/bin/cli.rs
use govuk_scrape::cli;

fn main() {
    let _ = color_eyre::install();
    cli::run();
}
