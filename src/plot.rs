// src/plot.rs
//
// Chart the logged series as an SVG line plot. This is the downstream
// consumer of the append-only log: it re-reads the whole file every run,
// so every line must still parse. A corrupt log is a loud error here
// rather than a silently thinner chart.

use std::{error::Error, fs, path::PathBuf};

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::file::ensure_directory;
use crate::store::{self, LogRecord};

const W: f64 = 960.0;
const H: f64 = 540.0;
const MARGIN_L: f64 = 90.0;
const MARGIN_R: f64 = 40.0;
const MARGIN_T: f64 = 60.0;
const MARGIN_B: f64 = 50.0;
const LINE_COLOR: &str = "#1f77b4";

/// Render the full log to `<plots_dir>/<plot_filename>`.
/// Returns the path written to.
pub fn render(settings: &Settings) -> Result<PathBuf, Box<dyn Error>> {
    let records = store::load_records(&settings.logfile)?;
    if records.is_empty() {
        return Err("log is empty, nothing to plot".into());
    }

    let mut points = Vec::with_capacity(records.len());
    for record in &records {
        let t = NaiveDateTime::parse_from_str(&record.time, &settings.datetime_format)
            .map_err(|e| format!("bad timestamp {:?}: {e}", record.time))?;
        points.push((t.and_utc().timestamp(), record.count));
    }

    let svg = draw(&points, &records);

    ensure_directory(&settings.plots_dir)?;
    let path = settings.plot_path();
    fs::write(&path, svg)?;
    Ok(path)
}

fn draw(points: &[(i64, u64)], records: &[LogRecord]) -> String {
    let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);

    // Degenerate spans (single observation, flat series) still render.
    let x_span = (x_max - x_min).max(1) as f64;
    let y_span = (y_max - y_min).max(1) as f64;

    let plot_w = W - MARGIN_L - MARGIN_R;
    let plot_h = H - MARGIN_T - MARGIN_B;

    let sx = |x: i64| MARGIN_L + (x - x_min) as f64 / x_span * plot_w;
    let sy = |y: u64| H - MARGIN_B - (y - y_min) as f64 / y_span * plot_h;

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{W}" height="{H}" viewBox="0 0 {W} {H}" font-family="sans-serif">"#
    );
    svg.push('\n');
    svg.push_str(&format!(r#"<rect width="{W}" height="{H}" fill="white"/>"#));
    svg.push_str(&format!(
        r#"<text x="{}" y="32" text-anchor="middle" font-size="20" font-weight="bold">GOV.UK statistics count over time</text>"#,
        W / 2.0
    ));
    svg.push('\n');

    // Axes
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_L}" y1="{MARGIN_T}" x2="{MARGIN_L}" y2="{}" stroke="#333"/>"##,
        H - MARGIN_B
    ));
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_L}" y1="{0}" x2="{1}" y2="{0}" stroke="#333"/>"##,
        H - MARGIN_B,
        W - MARGIN_R
    ));
    svg.push('\n');

    // Horizontal gridlines with thousands-separated labels
    for i in 0..=4 {
        let frac = i as f64 / 4.0;
        let y = H - MARGIN_B - frac * plot_h;
        let value = y_min as f64 + frac * (y_max - y_min) as f64;
        svg.push_str(&format!(
            r##"<line x1="{MARGIN_L}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="#ddd"/>"##,
            W - MARGIN_R
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" text-anchor="end" font-size="12">{}</text>"#,
            MARGIN_L - 8.0,
            y + 4.0,
            format_thousands(value.round() as u64)
        ));
        svg.push('\n');
    }

    // First and last observation dates on the x axis
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        let label_y = H - MARGIN_B + 20.0;
        svg.push_str(&format!(
            r#"<text x="{MARGIN_L}" y="{label_y}" text-anchor="start" font-size="12">{}</text>"#,
            date_part(&first.time)
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{label_y}" text-anchor="end" font-size="12">{}</text>"#,
            W - MARGIN_R,
            date_part(&last.time)
        ));
        svg.push('\n');
    }

    // The series itself
    let pts: Vec<String> = points
        .iter()
        .map(|&(x, y)| format!("{:.1},{:.1}", sx(x), sy(y)))
        .collect();
    svg.push_str(&format!(
        r#"<polyline points="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
        pts.join(" ")
    ));
    svg.push('\n');
    for &(x, y) in points {
        svg.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="3" fill="{LINE_COLOR}"/>"#,
            sx(x),
            sy(y)
        ));
    }
    svg.push('\n');

    // Latest value annotation
    if let (Some(&(x, y)), Some(last)) = (points.last(), records.last()) {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">Latest: {} ({})</text>"#,
            sx(x) - 8.0,
            sy(y) - 8.0,
            format_thousands(y),
            date_part(&last.time)
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// 1234567 → "1,234,567"
fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn date_part(time: &str) -> &str {
    time.split_whitespace().next().unwrap_or(time)
}
