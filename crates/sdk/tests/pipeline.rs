mod common;

use std::time::Duration;

use common::{MockNode, MockResponse, closed_port_url};
use serde_json::json;
use strat_sdk::{ApiSdkError, ClientConfig, Method, StratClient};

#[tokio::test]
async fn test_success_returns_top_level_object() {
    let node = MockNode::fixed(MockResponse::json(200, json!({ "height": 12, "synced": true }))).await;

    let info = node.client().blockchain.get_info().await.unwrap();

    assert_eq!(info.get("height"), Some(&json!(12)));
    assert_eq!(info.get("synced"), Some(&json!(true)));
    let request = node.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path_and_query, "/api/blockchain/info");
}

#[tokio::test]
async fn test_api_error_uses_error_field() {
    let node = MockNode::fixed(MockResponse::json(404, json!({ "error": "not found" }))).await;

    let err = node.client().transaction.get("missing").await.unwrap_err();

    match err {
        ApiSdkError::Api { status_code, message } => {
            assert_eq!(status_code, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_falls_back_to_raw_body() {
    let node = MockNode::fixed(MockResponse::text(500, "upstream exploded")).await;

    let err = node.client().health.check().await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    match err {
        ApiSdkError::Api { message, .. } => assert_eq!(message, "upstream exploded"),
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_status_wins_over_valid_body() {
    let node = MockNode::fixed(MockResponse::json(400, json!({ "success": true }))).await;

    let err = node.client().mining.get_info().await.unwrap_err();

    match err {
        ApiSdkError::Api { status_code, message } => {
            assert_eq!(status_code, 400);
            assert_eq!(message, r#"{"success":true}"#);
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_success_with_array_body_is_decode_error() {
    let node = MockNode::fixed(MockResponse::json(200, json!([{ "a": 1 }]))).await;

    let err = node.client().blockchain.get_info().await.unwrap_err();

    assert!(matches!(err, ApiSdkError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_success_with_non_json_body_is_decode_error() {
    let node = MockNode::fixed(MockResponse::text(200, "OK")).await;

    let err = node.client().health.check().await.unwrap_err();

    assert!(matches!(err, ApiSdkError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_headers_without_api_key() {
    let node = MockNode::fixed(MockResponse::json(200, json!({}))).await;

    node.client().health.check().await.unwrap();

    let request = node.last_request();
    assert_eq!(request.header("content-type").as_deref(), Some("application/json"));
    assert_eq!(request.header("authorization"), None);
}

#[tokio::test]
async fn test_headers_with_api_key() {
    let node = MockNode::fixed(MockResponse::json(200, json!({}))).await;

    node.client_with(|c| c.with_api_key("s3cret")).health.check().await.unwrap();

    let request = node.last_request();
    assert_eq!(request.header("authorization").as_deref(), Some("Bearer s3cret"));
    assert_eq!(request.header("content-type").as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_post_without_body_sends_empty_payload() {
    let node = MockNode::fixed(MockResponse::json(200, json!({ "mining": false }))).await;

    node.client().mining.stop().await.unwrap();

    let request = node.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path_and_query, "/api/mining/stop");
    assert!(request.body.is_empty());
    assert_eq!(request.header("content-type").as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_unserializable_body_is_not_sent() {
    use std::collections::HashMap;

    let node = MockNode::fixed(MockResponse::json(200, json!({}))).await;

    // JSON object keys must be strings
    let mut payload = HashMap::new();
    payload.insert((1, 2), "value");

    let err = node.client().nft.mint(&payload).await.unwrap_err();

    assert!(matches!(err, ApiSdkError::Serialization(_)), "got {:?}", err);
    assert!(node.requests().is_empty());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = StratClient::new(ClientConfig::new(closed_port_url().await));

    let err = client.health.check().await.unwrap_err();

    assert!(matches!(err, ApiSdkError::Network(_)), "got {:?}", err);
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let node = MockNode::fixed(
        MockResponse::json(200, json!({ "late": true })).delayed(Duration::from_secs(2)),
    )
    .await;

    let err = node
        .client_with(|c| c.with_timeout(Duration::from_millis(200)))
        .blockchain
        .get_info()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiSdkError::Network(_)), "got {:?}", err);
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_generic_request_escape_hatch() {
    let node = MockNode::fixed(MockResponse::json(200, json!({ "ok": true }))).await;

    let result = node
        .client()
        .request(Method::PUT, "/api/custom/thing", Some(&json!({ "x": 1 })))
        .await
        .unwrap();

    assert_eq!(result.get("ok"), Some(&json!(true)));
    let request = node.last_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path_and_query, "/api/custom/thing");
    assert_eq!(request.json_body(), json!({ "x": 1 }));
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let node = MockNode::fixed(MockResponse::json(200, json!({ "status": "ok" }))).await;
    let client = StratClient::new(ClientConfig::new(format!("{}/", node.url())));

    client.health.check().await.unwrap();

    assert_eq!(node.last_request().path_and_query, "/health");
}
