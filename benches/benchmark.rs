//! Performance benchmarks for listing discovery.
//!
//! Run with: `cargo bench`
//!
//! - The small season fixture used by the integration tests
//! - Synthetic full-season listings of increasing size, with the newest
//!   document at the top and the worst case (document at the bottom)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fia_doc_watch::{find_latest_document_in_html, DocumentRules, ListingPage};
use url::Url;

const SEASON_PAGE: &str = include_str!("../tests/fixtures/season_page.html");

fn season_url() -> Url {
    Url::parse("https://www.fia.com/documents/season/season-2025-2071").unwrap_or_else(|e| panic!("{e}"))
}

/// A season of `events` events with `docs_per_event` documents each.
///
/// With `documents_last`, every document entry is replaced by a plain link so
/// the only qualifying document sits at the very end.
fn synthetic_season(events: usize, docs_per_event: usize, documents_last: bool) -> String {
    let mut html = String::from("<html><body><ul>");
    for event in 0..events {
        html.push_str(&format!("<li>2025 Event {event} Grand Prix</li>"));
        for doc in 0..docs_per_event {
            let href = if documents_last {
                format!("/documents/archive/{event}_{doc}")
            } else {
                format!("/system/files/decision-document/2025_event_{event}_grand_prix_-_doc_{doc}.pdf")
            };
            html.push_str(&format!(
                "<li><a href=\"{href}\"><div>Doc {doc} - Decision</div><div>Published on 14:05CET</div></a></li>"
            ));
        }
    }
    if documents_last {
        html.push_str("<li><a href=\"/system/files/decision-document/last.pdf\">Last</a></li>");
    }
    html.push_str("</ul></body></html>");
    html
}

fn bench_fixture(c: &mut Criterion) {
    let base = season_url();
    let rules = DocumentRules::default();

    c.bench_function("fixture_latest_document", |b| {
        b.iter(|| find_latest_document_in_html(black_box(SEASON_PAGE), &base, &rules));
    });
}

fn bench_synthetic_seasons(c: &mut Criterion) {
    let base = season_url();
    let rules = DocumentRules::default();
    let mut group = c.benchmark_group("synthetic_season");

    for events in [5, 24] {
        for documents_last in [false, true] {
            let html = synthetic_season(events, 40, documents_last);
            let label = if documents_last { "worst_case" } else { "newest_first" };
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(label, format!("{events} events")),
                &html,
                |b, html| {
                    b.iter(|| find_latest_document_in_html(black_box(html), &base, &rules));
                },
            );
        }
    }

    group.finish();
}

fn bench_parse_only(c: &mut Criterion) {
    let html = synthetic_season(24, 40, false);
    c.bench_function("listing_parse_24_events", |b| {
        b.iter(|| ListingPage::parse(black_box(&html)));
    });
}

criterion_group!(benches, bench_fixture, bench_synthetic_seasons, bench_parse_only);
criterion_main!(benches);
