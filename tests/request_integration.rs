use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use torn_api_client::TornError;
use torn_api_client::rate_limit::RateLimitConfig;
use torn_api_client::rest::{ApiRequest, TornClient};

fn build_client(server: &MockServer) -> TornClient {
    TornClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .build()
        .unwrap()
}

/// Client whose backoff is short enough to retry within a test.
fn build_fast_backoff_client(server: &MockServer, max_retries: u32) -> TornClient {
    TornClient::builder()
        .base_url(server.uri())
        .api_key("test_key")
        .rate_limit(RateLimitConfig {
            limit: 100,
            timeframe: Duration::from_millis(50),
            backoff_factor: 2.0,
            enabled: true,
        })
        .max_throttle_retries(max_retries)
        .build()
        .unwrap()
}

fn throttled() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "error": {"code": 5, "error": "Too many requests"}
    }))
}

#[tokio::test]
async fn test_request_sends_key_selections_and_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/"))
        .and(query_param("key", "test_key"))
        .and(query_param("selections", "basic,attacks"))
        .and(query_param("from", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "level": 3,
            "name": "Tester",
            "player_id": 99,
            "attacks": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ApiRequest::new("user", "")
        .selection("basic,attacks")
        .param("from", "100");

    let json = client.request(&request).await.unwrap();
    assert_eq!(json["player_id"], 99);
}

#[tokio::test]
async fn test_identical_requests_hit_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Tester"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ApiRequest::new("user", "")
        .selection("basic,attacks")
        .param("from", "100");

    let first = client.request(&request).await;
    let second = client.request(&request).await;

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cache_shared_between_clones() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torn/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timestamp": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let clone = client.clone();
    let request = ApiRequest::new("torn", "").selection("timestamp");

    assert!(client.request(&request).await.is_some());
    assert!(clone.request(&request).await.is_some());
}

#[tokio::test]
async fn test_clear_cache_forces_new_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/torn/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timestamp": 1})))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ApiRequest::new("torn", "").selection("timestamp");

    client.request(&request).await.unwrap();
    client.clear_cache().await;
    client.request(&request).await.unwrap();
}

#[tokio::test]
async fn test_terminal_api_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": {"code": 2}})))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ApiRequest::new("user", "").selection("basic");

    assert!(client.request(&request).await.is_none());
    assert_eq!(client.rate_limiter().throttle_count().await, 0);

    match client.try_request(&request).await {
        Err(TornError::Api(error)) => {
            assert_eq!(error.code, 2);
            assert!(error.is_key_error());
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_throttled_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/206"))
        .respond_with(throttled())
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/market/206"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bazaar": [{"cost": 850_000, "quantity": 3}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_fast_backoff_client(&server, 5);
    let request = ApiRequest::new("market", "206").selection("bazaar");

    let json = client.request(&request).await.unwrap();
    assert_eq!(json["bazaar"][0]["cost"], 850_000);
    assert_eq!(client.rate_limiter().throttle_count().await, 2);
}

#[tokio::test]
async fn test_throttling_gives_up_after_max_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(throttled())
        .expect(3)
        .mount(&server)
        .await;

    let client = build_fast_backoff_client(&server, 2);
    let request = ApiRequest::new("user", "").selection("basic");

    assert!(client.request(&request).await.is_none());
}

#[tokio::test]
async fn test_network_failure_returns_none() {
    // Nothing listens on port 1.
    let client = TornClient::builder()
        .base_url("http://127.0.0.1:1")
        .api_key("test_key")
        .build()
        .unwrap();
    let request = ApiRequest::new("user", "").selection("basic");

    assert!(client.request(&request).await.is_none());
    assert!(matches!(
        client.try_request(&request).await,
        Err(TornError::HttpMiddleware(_))
    ));
}

#[tokio::test]
async fn test_http_error_status_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ApiRequest::new("user", "").selection("basic");

    assert!(client.request(&request).await.is_none());
}

#[tokio::test]
async fn test_malformed_body_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ApiRequest::new("user", "").selection("basic");

    assert!(client.request(&request).await.is_none());
}
