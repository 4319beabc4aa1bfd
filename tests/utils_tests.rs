//! Tests for utils module functionality.

use fetchbar::utils::{declared_length, parse_content_length};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};

mod common;
use common::helpers::*;

#[test]
fn test_parse_content_length_edge_cases() {
    // Test with whitespace
    assert_eq!(parse_content_length(" 2048 "), Some(2048));
    // Test with zero size
    assert_eq!(parse_content_length("0"), Some(0));
    // Test with large numbers
    assert_eq!(parse_content_length("999999999999"), Some(999999999999));
    // Negative and overflowing values are not lengths
    assert_eq!(parse_content_length("-1"), None);
    assert_eq!(parse_content_length("99999999999999999999999"), None);
}

#[test]
fn test_declared_length_ignores_other_headers() {
    let mut headers = create_test_headers();
    assert_eq!(declared_length(&headers), None);

    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("512"));
    assert_eq!(declared_length(&headers), Some(512));
}

#[test]
fn test_declared_length_malformed() {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12 bytes"));
    assert_eq!(declared_length(&headers), None);
}

#[tokio::test]
async fn test_declared_length_real_response() {
    let url = serve_once(http_response("200 OK", &create_test_content(321))).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let response = client.get(url).send().await.unwrap();

    assert_eq!(declared_length(response.headers()), Some(321));
}
