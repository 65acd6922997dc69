// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Counts how many times each page is linked, keyed by normalized URL
// - Optional restriction to links that stay on the seed site
// - A fetch budget that caps the whole run
// =============================================================================

mod counts;
mod queue;

pub use counts::LinkCounts;
pub use queue::{crawl, CrawlOptions, CrawlOutcome, CrawlSession, CrawlStats};
