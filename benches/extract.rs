// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use govuk_scrape::scrape::stats;

fn sample_doc() -> String {
    // Synthetic results page, large enough to make scanning cost visible.
    let mut doc = String::from("<html><head>");
    doc.push_str(r#"<meta name="description" content="Search results">"#);
    doc.push_str("</head><body>");
    for i in 0..500 {
        doc.push_str(&format!(
            r#"<div class="result"><a href="/doc/{i}">Document {i}</a></div>"#
        ));
    }
    doc.push_str(r#"<span class="js-result-count">96,269 results</span>"#);
    doc.push_str("</body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let span_doc = sample_doc();
    c.bench_function("extract_span_fallback", |b| {
        b.iter(|| stats::extract_count(black_box(&span_doc)).unwrap())
    });

    let mut meta_doc = sample_doc();
    meta_doc.insert_str(
        "<html><head>".len(),
        r#"<meta name="govuk:search-result-count" content="96269">"#,
    );
    c.bench_function("extract_meta_fast_path", |b| {
        b.iter(|| stats::extract_count(black_box(&meta_doc)).unwrap())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
