// src/fetch/mod.rs
// =============================================================================
// The fetch capability used by the crawler.
//
// Fetching happens in two steps:
// 1. `Fetcher::fetch` sends the request and returns once the response head
//    (status + headers) is in. Nothing of the body has been read yet.
// 2. `PageResponse::read_body` streams the body to the end.
//
// The crawl engine looks at the status and content type between the two, so
// a 404 page or a linked zip file is dropped without downloading it.
//
// The real implementation (`HttpFetcher`) uses reqwest; tests plug in an
// in-memory one.
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::error::CrawlError;

pub use http::{FetchConfig, HttpFetcher};

/// A response whose head has arrived but whose body is still unread
#[async_trait]
pub trait PageResponse: Send {
    /// HTTP status code
    fn status(&self) -> u16;

    /// Value of the Content-Type header, empty when the header is missing
    fn content_type(&self) -> &str;

    fn is_html(&self) -> bool {
        self.content_type().contains("text/html")
    }

    /// Reads the rest of the body and decodes it as text
    ///
    /// The body can only be read once; later calls return an empty string.
    async fn read_body(&mut self) -> Result<String, CrawlError>;
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Sends a request for `url` and returns as soon as the head is in
    ///
    /// Errors are transport-level only (DNS, connection, timeout). A 404 or a
    /// JSON response is still a successful fetch here; the crawl engine
    /// rejects it.
    async fn fetch(&self, url: &str) -> Result<Box<dyn PageResponse>, CrawlError>;
}
