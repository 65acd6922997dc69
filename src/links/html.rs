// src/links/html.rs
// =============================================================================
// This module extracts link targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Link expansion is intentionally simple:
// - href starting with '/'  -> base_url + href (plain string concatenation)
// - anything else           -> passed through untouched
//
// That means "path/x" or "../x" are NOT resolved against the page. They reach
// the normalizer as-is, fail there (no "://"), and get skipped by the crawler.
// Full relative resolution would change which pages get counted, so we leave
// it alone.
// =============================================================================

use scraper::{Html, Selector};

// Extracts every anchor href from an HTML page, in document order
//
// Parameters:
//   html: the HTML content to parse
//   base_url: the URL of the page, prepended to site-relative hrefs
//
// Returns: Vec<String> of link targets. Duplicates are kept; anchors without
// an href attribute are skipped.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid
    let selector = Selector::parse("a").expect("`a` is a valid CSS selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| expand_href(href, base_url))
        .collect()
}

// Expands a site-relative href ("/x") onto the base URL
//
// No slash collapsing happens here: "https://a.com/" + "/x" gives
// "https://a.com//x". Trailing slashes are the normalizer's job, and the
// crawler fetches exactly what the page pointed at.
fn expand_href(href: &str, base_url: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else {
        href.to_string()
    }
}
