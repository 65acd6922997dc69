// src/lib.rs
// =============================================================================
// link-tally: a breadth-first crawler that counts how often each page of a
// site is linked.
//
// Modules:
// - links: URL normalization and link extraction from HTML
// - fetch: The fetch capability (trait + reqwest implementation)
// - crawl: The crawl engine and the link count map
// - report: Rendering a finished crawl as text or JSON
// - error: The CrawlError type shared by all of the above
// =============================================================================

pub mod crawl;
pub mod error;
pub mod fetch;
pub mod links;
pub mod report;
