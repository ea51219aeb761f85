// tests/plot_render.rs

use std::fs;
use std::path::PathBuf;

use govuk_scrape::config::Settings;
use govuk_scrape::plot;
use govuk_scrape::store::{self, LogRecord};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("govuk_plot_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn settings_in(dir: &PathBuf) -> Settings {
    Settings {
        logfile: dir.join("log.json"),
        plots_dir: dir.join("plots"),
        ..Settings::default()
    }
}

#[test]
fn renders_svg_from_log() {
    let dir = tmp_dir("render");
    let settings = settings_in(&dir);

    let series = [
        ("2024-01-01 06:00:00", 96000u64),
        ("2024-02-01 06:00:00", 96269),
        ("2024-03-01 06:00:00", 97400),
    ];
    for (time, count) in series {
        store::append_record(&settings.logfile, &LogRecord { time: time.into(), count }).unwrap();
    }

    let path = plot::render(&settings).unwrap();
    assert_eq!(path, settings.plot_path());

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
    // latest-value annotation, thousands-separated
    assert!(svg.contains("Latest: 97,400 (2024-03-01)"));
}

#[test]
fn missing_log_is_an_error() {
    let dir = tmp_dir("missing");
    let settings = settings_in(&dir);
    assert!(plot::render(&settings).is_err());
}

#[test]
fn empty_log_is_an_error() {
    let dir = tmp_dir("empty");
    let settings = settings_in(&dir);
    fs::write(&settings.logfile, "").unwrap();
    assert!(plot::render(&settings).is_err());
}

#[test]
fn timestamp_not_matching_format_is_an_error() {
    let dir = tmp_dir("badtime");
    let settings = settings_in(&dir);
    store::append_record(
        &settings.logfile,
        &LogRecord { time: "yesterday, probably".into(), count: 1 },
    )
    .unwrap();
    assert!(plot::render(&settings).is_err());
}

#[test]
fn respects_custom_datetime_format() {
    let dir = tmp_dir("customfmt");
    let mut settings = settings_in(&dir);
    settings.datetime_format = "%d/%m/%Y %H:%M".into();

    store::append_record(
        &settings.logfile,
        &LogRecord { time: "01/03/2024 06:00".into(), count: 96269 },
    )
    .unwrap();

    let path = plot::render(&settings).unwrap();
    let svg = fs::read_to_string(path).unwrap();
    assert!(svg.contains("96,269"));
}
