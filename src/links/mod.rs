// src/links/mod.rs
// =============================================================================
// Link handling for the crawler.
//
// Submodules:
// - normalize: Turns a URL into the key used for deduplication and counting
// - html: Extracts link targets from an HTML page
// =============================================================================

mod html;
mod normalize;

pub use html::extract_links;
pub use normalize::normalize_url;
