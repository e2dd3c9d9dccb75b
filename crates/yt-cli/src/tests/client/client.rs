use crate::Client;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("https://example.youtrack.cloud/", "perm:abc");
    assert_eq!(client.base_url, "https://example.youtrack.cloud");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("https://example.youtrack.cloud", "perm:abc");
    assert_eq!(client.base_url, "https://example.youtrack.cloud");
}

#[test]
fn test_default_timeout_is_ten_seconds() {
    let client = Client::new("https://example.youtrack.cloud", "perm:abc");
    assert_eq!(client.timeout(), Duration::from_secs(10));
}

#[test]
fn test_with_timeout_overrides_default() {
    let client = Client::new("https://example.youtrack.cloud", "perm:abc")
        .with_timeout(Duration::from_secs(3));
    assert_eq!(client.timeout(), Duration::from_secs(3));
}
