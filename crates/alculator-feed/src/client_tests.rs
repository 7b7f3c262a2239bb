//! Unit tests for the FeedClient.

use super::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Test: FeedClient::new() uses the published feed URL
#[test]
fn test_feed_client_default_url() {
    let client = FeedClient::new().unwrap();
    assert_eq!(client.url(), DEFAULT_FEED_URL);
}

// Test: FeedClient uses the default timeout constant
#[test]
fn test_feed_client_default_timeout() {
    let client = FeedClient::new().unwrap();
    assert_eq!(client.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(DEFAULT_TIMEOUT_SECS, 30);
}

// Test: FeedClientBuilder overrides url and timeout
#[test]
fn test_feed_client_builder_overrides() {
    let client = FeedClient::builder()
        .url("https://test.example.com/feed.json")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    assert_eq!(client.url(), "https://test.example.com/feed.json");
    assert_eq!(client.timeout(), Duration::from_secs(5));
}

// Test: FeedClient should implement Clone
#[test]
fn test_feed_client_is_clone() {
    let client = FeedClient::with_url("https://example.com/feed.json").unwrap();
    let cloned = client.clone();
    assert_eq!(cloned.url(), client.url());
}

#[tokio::test]
async fn test_fetch_raw_returns_document() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"a": 1}]"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FeedClient::with_url(format!("{}/feed.json", mock_server.uri())).unwrap();
    let document = client.fetch_raw().await.unwrap();
    assert_eq!(document, serde_json::json!([{"a": 1}]));
}

#[tokio::test]
async fn test_fetch_raw_maps_http_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = FeedClient::with_url(mock_server.uri()).unwrap();
    let err = client.fetch_raw().await.unwrap_err();
    match err {
        Error::Feed(FeedError::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_raw_invalid_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = FeedClient::with_url(mock_server.uri()).unwrap();
    let err = client.fetch_raw().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got {err:?}");
}
