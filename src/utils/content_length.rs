//! Declared length extraction.
//!
//! The declared length of a transfer comes from the `Content-Length` header
//! of the response. A missing or malformed header is not an error: the
//! transfer simply runs with indeterminate progress.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};

/// Extract the declared length from response headers.
///
/// # Example
///
/// ```rust
/// use fetchbar::utils::declared_length;
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(declared_length(&headers), None);
///
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("1000"));
/// assert_eq!(declared_length(&headers), Some(1000));
/// ```
pub fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_content_length)
}

/// Parse a `Content-Length` header value.
///
/// ```rust
/// use fetchbar::utils::parse_content_length;
///
/// assert_eq!(parse_content_length(" 2048 "), Some(2048));
/// assert_eq!(parse_content_length("-1"), None);
/// ```
pub fn parse_content_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_content_length() {
        assert_eq!(parse_content_length("0"), Some(0));
        assert_eq!(parse_content_length("1024"), Some(1024));
        assert_eq!(parse_content_length(""), None);
        assert_eq!(parse_content_length("ten"), None);
        assert_eq!(parse_content_length("1.5"), None);
    }

    #[test]
    fn test_declared_length_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(declared_length(&headers), None);

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("4096"));
        assert_eq!(declared_length(&headers), Some(4096));

        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("garbage"));
        assert_eq!(declared_length(&headers), None);
    }
}
