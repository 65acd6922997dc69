// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP with reqwest.
//
// Key functionality:
// - One shared reqwest Client (connection pooling across the whole crawl)
// - Plain GET requests, redirects followed by reqwest's default policy
// - fetch() returns after the response head; the body is only read, chunk
//   by chunk, when read_body() is called
//
// Rust concepts:
// - async/await: The crawl loop waits here for each response
// - Streams: bytes_stream() yields the body as it arrives
// - Traits: HttpFetcher implements the Fetcher trait from mod.rs
// =============================================================================

use async_trait::async_trait;
use futures::StreamExt; // StreamExt gives us .next() on the body stream
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::trace;

use super::{Fetcher, PageResponse};
use crate::error::CrawlError;

/// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout; a timed out request is a failed page
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("link-tally/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetcher backed by a real HTTP client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { client })
    }
}

/// A response from `HttpFetcher`, body not yet read
pub struct HttpResponse {
    url: String,
    status: u16,
    content_type: String,
    // Taken on the first read_body
    response: Option<Response>,
}

#[async_trait]
impl PageResponse for HttpResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    async fn read_body(&mut self) -> Result<String, CrawlError> {
        let Some(response) = self.response.take() else {
            return Ok(String::new());
        };

        let mut buffer = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            trace!("{}: read {} bytes", self.url, chunk.len());
            buffer.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Box<dyn PageResponse>, CrawlError> {
        let response = self.client.get(url).send().await?;

        // A missing header becomes "", which the crawler rejects as non-HTML
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Box::new(HttpResponse {
            url: url.to_string(),
            status: response.status().as_u16(),
            content_type,
            response: Some(response),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_html_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"<a href="/x">x</a>"#, "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let mut page = fetcher.fetch(&server.uri()).await.unwrap();

        assert_eq!(page.status(), 200);
        assert!(page.is_html());
        assert_eq!(page.read_body().await.unwrap(), r#"<a href="/x">x</a>"#);

        // The body is gone after the first read
        assert_eq!(page.read_body().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_error_status_is_still_a_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let page = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.status(), 404);
    }

    #[tokio::test]
    async fn test_content_type_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let page = fetcher
            .fetch(&format!("{}/data", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.content_type(), "application/json");
        assert!(!page.is_html());
    }

    #[tokio::test]
    async fn test_head_available_before_large_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/archive.zip"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(vec![0u8; 32 * 1024 * 1024], "application/zip"),
            )
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let page = fetcher
            .fetch(&format!("{}/archive.zip", server.uri()))
            .await
            .unwrap();

        assert_eq!(page.status(), 200);
        assert_eq!(page.content_type(), "application/zip");
        assert!(!page.is_html());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Grab a free port, then close the listener so nothing answers there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();
        let err = fetcher
            .fetch(&format!("http://127.0.0.1:{}/", port))
            .await
            .err().unwrap();

        assert!(matches!(err, CrawlError::Transport(_)));
    }
}
