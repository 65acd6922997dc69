// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is exactly one positional argument: the URL to start from. clap
// rejects a missing URL or a second positional with a usage error before we
// ever get to crawl.
//
// Everything else is an optional flag that maps onto CrawlOptions,
// FetchConfig or the report format.
// =============================================================================

use clap::{ArgAction, Parser};
use std::time::Duration;
use tracing::Level;
use url::Url;

use link_tally::crawl::CrawlOptions;
use link_tally::error::CrawlError;
use link_tally::fetch::FetchConfig;

#[derive(Parser, Debug)]
#[command(
    name = "link-tally",
    version,
    about = "Crawl a website breadth-first and count how often each page is linked",
    long_about = "link-tally starts at one URL, follows the links it finds (staying on the same site \
                  by default) and reports which pages are linked the most."
)]
pub struct Cli {
    /// URL to start crawling from (https:// is assumed when no scheme is given)
    ///
    /// Example: link-tally blog.boot.dev
    pub url: String,

    /// Maximum number of pages to fetch and parse
    #[arg(long, default_value_t = 1000)]
    pub max_fetches: usize,

    /// Also crawl links that leave the start site
    #[arg(long)]
    pub follow_external: bool,

    /// Number of pages shown in the report
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Show every page in the report instead of the top ones
    #[arg(long)]
    pub all: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The start URL with a default scheme, checked to be an absolute URL
    pub fn start_url(&self) -> Result<String, CrawlError> {
        let url = with_default_scheme(&self.url);
        Url::parse(&url).map_err(|_| CrawlError::InvalidStartUrl(self.url.clone()))?;
        Ok(url)
    }

    pub fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            restrict_to_seed_site: !self.follow_external,
            max_fetches: self.max_fetches,
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout),
            ..FetchConfig::default()
        }
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// Prepends https:// unless the URL already says http:// or https://
fn with_default_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
