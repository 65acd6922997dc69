// src/report.rs
// =============================================================================
// Turns a finished crawl into something to print.
//
// Three formats:
// - top N:  the N most linked pages (default)
// - full:   every page, tab-indented
// - JSON:   counts plus crawl stats, for scripts and CI
//
// All of them list pages by link count, highest first. Pages with the same
// count appear in the order the crawl first found them.
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use crate::crawl::{CrawlOutcome, CrawlStats, LinkCounts};

const SEPARATOR: &str = "--------------------------------";

/// The `n` most linked pages
///
/// If fewer than `n` pages were found, all of them are listed.
pub fn render_top(counts: &LinkCounts, n: usize) -> String {
    let header = format!("Report of the best {} is starting:", n);
    let lines = counts
        .sorted_by_count()
        .into_iter()
        .take(n)
        .map(|(url, count)| format!("Found {} internal links to {}", count, url));

    render_lines(&header, lines)
}

/// Every page that was linked
pub fn render_full(counts: &LinkCounts) -> String {
    let lines = counts
        .sorted_by_count()
        .into_iter()
        .map(|(url, count)| format!("\tFound {} internal links to {}", count, url));

    render_lines("Report is starting:", lines)
}

// Separator, header, then one line per entry, each newline-terminated
fn render_lines(header: &str, lines: impl Iterator<Item = String>) -> String {
    let mut out = format!("{}\n{}\n", SEPARATOR, header);
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    start_url: &'a str,
    #[serde(flatten)]
    stats: &'a CrawlStats,
    links: Vec<JsonLink<'a>>,
}

#[derive(Serialize)]
struct JsonLink<'a> {
    url: &'a str,
    count: usize,
}

/// The whole outcome as pretty-printed JSON
pub fn render_json(outcome: &CrawlOutcome) -> Result<String> {
    let report = JsonReport {
        start_url: &outcome.start_url,
        stats: &outcome.stats,
        links: outcome
            .counts
            .sorted_by_count()
            .into_iter()
            .map(|(url, count)| JsonLink { url, count })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
