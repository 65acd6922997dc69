// src/links/normalize.rs
// =============================================================================
// Turns a URL into the key we use to deduplicate and count pages.
//
// The rules are deliberately minimal:
// 1. Drop everything up to and including "://" (the scheme)
// 2. Drop any trailing '/' characters
//
// Nothing else is touched: host case, query strings and fragments all stay
// as they are. So "http://a.com/x/" and "https://a.com/x" share a key, but
// "https://A.com/x" gets its own.
// =============================================================================

use crate::error::CrawlError;

const SCHEME_SEPARATOR: &str = "://";

// Normalizes a raw URL into a page key
//
// Examples:
//   "https://blog.boot.dev/path/" -> "blog.boot.dev/path"
//   "http://blog.boot.dev/path"   -> "blog.boot.dev/path"
//   "http:/blog.boot.dev/path"    -> Err(MalformedUrl)
pub fn normalize_url(raw_url: &str) -> Result<String, CrawlError> {
    let start = raw_url
        .find(SCHEME_SEPARATOR)
        .ok_or_else(|| CrawlError::MalformedUrl(raw_url.to_string()))?;

    let rest = &raw_url[start + SCHEME_SEPARATOR.len()..];
    Ok(rest.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_and_trailing_slash_collapse() {
        let expected = "blog.boot.dev/path";
        assert_eq!(normalize_url("https://blog.boot.dev/path/").unwrap(), expected);
        assert_eq!(normalize_url("https://blog.boot.dev/path").unwrap(), expected);
        assert_eq!(normalize_url("http://blog.boot.dev/path/").unwrap(), expected);
        assert_eq!(normalize_url("http://blog.boot.dev/path").unwrap(), expected);
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        let err = normalize_url("http:/blog.boot.dev/path").unwrap_err();
        assert!(matches!(err, CrawlError::MalformedUrl(_)));
        assert!(err.to_string().contains("bad http url"));

        assert!(normalize_url("bad:/a.com").is_err());
        assert!(normalize_url("/relative/path").is_err());
    }

    #[test]
    fn test_strips_every_trailing_slash() {
        assert_eq!(normalize_url("https://a.com///").unwrap(), "a.com");
        assert_eq!(normalize_url("https://a.com/p//").unwrap(), "a.com/p");
    }

    #[test]
    fn test_no_further_canonicalization() {
        assert_eq!(normalize_url("https://A.com/X").unwrap(), "A.com/X");
        assert_eq!(normalize_url("https://a.com/p?b=2&a=1").unwrap(), "a.com/p?b=2&a=1");
        assert_eq!(normalize_url("https://a.com/p#top").unwrap(), "a.com/p#top");
    }

    #[test]
    fn test_renormalizing_a_key_fails_cleanly() {
        // A key has no scheme left, so feeding it back in is rejected rather
        // than silently changed.
        let key = normalize_url("https://a.com/p/").unwrap();
        assert!(normalize_url(&key).is_err());

        // Re-attaching any scheme gets the same key back.
        let again = normalize_url(&format!("ftp://{}", key)).unwrap();
        assert_eq!(again, key);
    }

    #[test]
    fn test_only_first_separator_counts() {
        assert_eq!(
            normalize_url("https://a.com/redirect?to=http://b.com/").unwrap(),
            "a.com/redirect?to=http://b.com"
        );
    }
}
