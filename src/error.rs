// src/error.rs
// =============================================================================
// Error types for the crawl core.
//
// Every failure that can happen while processing one frontier item maps onto
// one of these variants. The crawl loop logs them and moves on; none of them
// end a crawl once it has started.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrawlError {
    /// The URL has no "://" scheme separator, so it cannot be normalized
    #[error("bad http url: {0}")]
    MalformedUrl(String),

    /// The server answered with a status code of 400 or above
    #[error("failed to get {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The response is not an HTML page
    #[error("page is not a website: {url} ({content_type})")]
    UnsupportedContentType { url: String, content_type: String },

    /// Network-level failure (DNS, connection refused, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The URL given on the command line is not a usable absolute URL
    #[error("invalid start URL '{0}'")]
    InvalidStartUrl(String),
}
