// src/crawl/queue.rs
// =============================================================================
// This module implements the crawl itself, breadth-first.
//
// How it works:
// 1. Seed the counts with the start URL (count 1) and the queue with it
// 2. Take the URL at the front of the queue and fetch it
// 3. Extract all links from the page
// 4. Count every link; queue the ones we've never seen (if in scope and
//    there's budget left for them)
// 5. Repeat until the queue is empty or the fetch budget is used up
//
// Budget rules:
// - Only pages that were fetched AND parsed use up budget. A 404, a non-HTML
//   response or a network error costs nothing.
// - A new link is queued only while the remaining budget is larger than the
//   queue, so the queue never holds more work than we could ever do.
//
// Scope rule:
// - With `restrict_to_seed_site`, a link is queued only if its raw text
//   contains the start URL. It's a substring test, not a host comparison:
//   "https://site.dev.example.com" is "inside" "https://site.dev".
//
// Rust concepts:
// - VecDeque: Double-ended queue, pop_front() + push_back() gives FIFO order
// - Generics: the session works with any Fetcher (real HTTP or a test fake)
// =============================================================================

use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

use super::LinkCounts;
use crate::error::CrawlError;
use crate::fetch::Fetcher;
use crate::links::{extract_links, normalize_url};

/// Knobs for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Only follow links whose text contains the start URL
    pub restrict_to_seed_site: bool,
    /// Maximum number of pages fetched and parsed
    pub max_fetches: usize,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            restrict_to_seed_site: true,
            max_fetches: 1000,
        }
    }
}

/// Bookkeeping numbers collected while crawling
#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlStats {
    /// Pages fetched and parsed (each one used a unit of budget)
    pub pages_fetched: usize,
    /// Pages skipped because of an HTTP error, content type or network failure
    pub pages_failed: usize,
    /// Links found on fetched pages, duplicates included
    pub links_seen: usize,
    /// Links dropped because they couldn't be normalized
    pub links_skipped: usize,
}

/// Everything a finished crawl hands to the report
#[derive(Debug)]
pub struct CrawlOutcome {
    pub start_url: String,
    pub counts: LinkCounts,
    pub stats: CrawlStats,
}

/// State of one crawl run
///
/// Nothing here outlives the run: each call to `crawl` builds a fresh session.
pub struct CrawlSession<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    start_url: String,
    options: CrawlOptions,
    counts: LinkCounts,
    frontier: VecDeque<String>,
    budget: usize,
    stats: CrawlStats,
}

impl<'a, F: Fetcher + ?Sized> CrawlSession<'a, F> {
    /// Seeds a session with the start URL
    ///
    /// Fails with `MalformedUrl` if the start URL can't be normalized.
    pub fn new(fetcher: &'a F, start_url: &str, options: CrawlOptions) -> Result<Self, CrawlError> {
        let mut counts = LinkCounts::new();
        counts.record(normalize_url(start_url)?);

        let mut frontier = VecDeque::new();
        frontier.push_back(start_url.to_string());

        Ok(Self {
            fetcher,
            start_url: start_url.to_string(),
            budget: options.max_fetches,
            options,
            counts,
            frontier,
            stats: CrawlStats::default(),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.frontier.is_empty() || self.budget == 0
    }

    /// Remaining page fetches
    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Crawls until the queue is empty or the budget is spent
    pub async fn run(mut self) -> CrawlOutcome {
        while !self.is_finished() {
            self.step().await;
        }

        info!(
            "Crawl finished: {} page(s) fetched, {} failed, {} distinct page(s) linked",
            self.stats.pages_fetched,
            self.stats.pages_failed,
            self.counts.len()
        );

        CrawlOutcome {
            start_url: self.start_url,
            counts: self.counts,
            stats: self.stats,
        }
    }

    // Processes the URL at the front of the queue
    async fn step(&mut self) {
        let Some(url) = self.frontier.pop_front() else {
            return;
        };

        let links = match self.fetch_links(&url).await {
            Ok(links) => links,
            Err(e) => {
                // Skipped, not retried, and no budget used
                warn!("Failed to fetch {}: {}", url, e);
                self.stats.pages_failed += 1;
                return;
            }
        };

        info!(
            "Fetched {}, {} remaining",
            url,
            self.frontier.len().min(self.budget)
        );
        self.budget = self.budget.saturating_sub(1);
        self.stats.pages_fetched += 1;

        for link in links {
            self.record_link(link);
        }
    }

    // Fetches a page and returns the links on it
    //
    // Status and content type are judged from the response head, before any
    // of the body is read.
    async fn fetch_links(&self, url: &str) -> Result<Vec<String>, CrawlError> {
        let mut page = self.fetcher.fetch(url).await?;

        if page.status() >= 400 {
            return Err(CrawlError::HttpStatus {
                url: url.to_string(),
                status: page.status(),
            });
        }

        if !page.is_html() {
            return Err(CrawlError::UnsupportedContentType {
                url: url.to_string(),
                content_type: page.content_type().to_string(),
            });
        }

        let body = page.read_body().await?;
        Ok(extract_links(&body, url))
    }

    // Counts one discovered link and queues it if it's new
    fn record_link(&mut self, link: String) {
        self.stats.links_seen += 1;

        let key = match normalize_url(&link) {
            Ok(key) => key,
            Err(e) => {
                debug!("Failed to normalize {}: {}", link, e);
                self.stats.links_skipped += 1;
                return;
            }
        };

        // Already counted means already queued, fetched, or left out
        if !self.counts.record(key) {
            return;
        }

        if self.budget > self.frontier.len() && self.in_scope(&link) {
            debug!("Queued {}", link);
            self.frontier.push_back(link);
        }
    }

    fn in_scope(&self, link: &str) -> bool {
        !self.options.restrict_to_seed_site || link.contains(&self.start_url)
    }
}

/// Crawls from `start_url` and returns how often each page was linked
pub async fn crawl<F: Fetcher + ?Sized>(
    fetcher: &F,
    start_url: &str,
    options: CrawlOptions,
) -> Result<CrawlOutcome, CrawlError> {
    info!(
        "Starting crawl at {} (budget {}, {})",
        start_url,
        options.max_fetches,
        if options.restrict_to_seed_site {
            "same site only"
        } else {
            "following external links"
        }
    );

    let session = CrawlSession::new(fetcher, start_url, options)?;
    Ok(session.run().await)
}
