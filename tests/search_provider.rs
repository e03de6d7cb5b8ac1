//! End-to-end tool invocations against a mocked Brave Search API.
//!
//! Uses wiremock to stand in for the provider, so every test exercises the
//! full lookup → validate → relay path through the real reqwest client.

use std::sync::Arc;

use rmcp::model::{ErrorCode, JsonObject};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use search_mcp_server::core::config::SearchConfig;
use search_mcp_server::core::{Config, McpServer};
use search_mcp_server::domains::search::BraveSearchClient;
use search_mcp_server::domains::tools::{InvocationError, ToolResult};

const API_KEY: &str = "test-api-key";

fn server_for(mock: &MockServer, api_key: Option<&str>) -> McpServer {
    let search = SearchConfig::new(
        format!("{}/res/v1", mock.uri()),
        api_key.map(str::to_string),
    );
    let client = BraveSearchClient::new(&search).unwrap();
    McpServer::with_search_api(Config::default(), Arc::new(client)).unwrap()
}

fn args(value: Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

// =============================================================================
// Request Shape Tests
// =============================================================================

#[tokio::test]
async fn test_web_search_sends_headers_and_query() {
    let mock = MockServer::start().await;
    let body = json!({ "type": "search", "web": { "results": [{ "title": "Cats" }] } });

    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .and(header("accept", "application/json"))
        .and(header("accept-encoding", "gzip"))
        .and(header("x-subscription-token", API_KEY))
        .and(query_param("q", "cats"))
        .and(query_param("count", "5"))
        .and(query_param("safesearch", "strict"))
        .and(query_param_is_missing("offset"))
        .and(query_param_is_missing("enable_rich_callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let result = server
        .dispatcher()
        .call_tool(
            "web_search",
            args(json!({ "query": "cats", "count": 5, "safeSearch": "strict" })),
        )
        .await
        .unwrap();

    assert_eq!(result, ToolResult::Json(body));
}

#[tokio::test]
async fn test_rich_callback_flag_sent_when_enabled() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .and(query_param("enable_rich_callback", "1"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rich": {} })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    server
        .dispatcher()
        .call_tool(
            "web_search",
            args(json!({ "query": "weather", "offset": 0, "enableRichCallback": true })),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_local_pois_repeats_ids_in_order() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/res/v1/local/pois"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    server
        .dispatcher()
        .call_tool("local_pois", args(json!({ "ids": ["a", "b"] })))
        .await
        .unwrap();

    let requests = mock.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("ids=a&ids=b"));
}

#[tokio::test]
async fn test_local_descriptions_endpoint() {
    let mock = MockServer::start().await;
    let body = json!({ "type": "local_descriptions", "results": [{ "id": "x" }] });

    Mock::given(method("GET"))
        .and(path("/res/v1/local/descriptions"))
        .and(query_param("ids", "x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let result = server
        .dispatcher()
        .call_tool("local_descriptions", args(json!({ "ids": ["x"] })))
        .await
        .unwrap();

    assert_eq!(result, ToolResult::Json(body));
}

#[tokio::test]
async fn test_rich_fetch_relays_structured_content() {
    let mock = MockServer::start().await;
    let body = json!({ "type": "rich", "results": [{ "subtype": "weather" }] });

    Mock::given(method("GET"))
        .and(path("/res/v1/web/rich"))
        .and(query_param("callback_key", "abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let result = server
        .dispatcher()
        .invoke("rich_fetch", args(json!({ "callback_key": "abc123" })))
        .await
        .unwrap();

    assert_eq!(result.structured_content, Some(body));
    assert_eq!(result.is_error, Some(false));
}

// =============================================================================
// Failure Tests
// =============================================================================

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let calls = [
        ("web_search", json!({ "query": "cats" })),
        ("local_pois", json!({ "ids": ["a"] })),
        ("local_descriptions", json!({ "ids": ["a"] })),
        ("rich_fetch", json!({ "callback_key": "k" })),
    ];

    for (tool, arguments) in calls {
        let mock = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock)
            .await;

        let server = server_for(&mock, None);
        let err = server
            .dispatcher()
            .call_tool(tool, args(arguments))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            InvocationError::MissingCredential {
                key: "SEARCH_MCP_API_KEY".to_string()
            },
            "{tool}"
        );
        mock.verify().await;
    }
}

#[tokio::test]
async fn test_invalid_arguments_make_no_request() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let err = server
        .dispatcher()
        .invoke("web_search", args(json!({ "query": "cats", "count": 0 })))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_non_success_status_relays_body() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let err = server
        .dispatcher()
        .call_tool("web_search", args(json!({ "query": "cats" })))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        InvocationError::UpstreamFailure {
            status: Some(429),
            body: "rate limited".to_string()
        }
    );
    assert_eq!(err.to_string(), "Brave API 429: rate limited");

    let envelope = err.to_mcp_error();
    assert_eq!(envelope.code, ErrorCode::INTERNAL_ERROR);
    assert_eq!(envelope.data.unwrap()["status"], 429);
}

#[tokio::test]
async fn test_undecodable_body_is_upstream_failure() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/res/v1/web/rich"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let err = server
        .dispatcher()
        .call_tool("rich_fetch", args(json!({ "callback_key": "k" })))
        .await
        .unwrap_err();

    assert!(matches!(err, InvocationError::UpstreamFailure { status: None, .. }));
}

// =============================================================================
// Idempotency Tests
// =============================================================================

#[tokio::test]
async fn test_repeated_calls_produce_identical_envelopes() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "b": 2, "a": 1 })))
        .expect(2)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Some(API_KEY));
    let dispatcher = server.dispatcher();
    let first = dispatcher
        .invoke("web_search", args(json!({ "query": "cats" })))
        .await
        .unwrap();
    let second = dispatcher
        .invoke("web_search", args(json!({ "query": "cats" })))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    // Key order of the provider body survives the relay.
    assert_eq!(
        serde_json::to_string(&first.structured_content).unwrap(),
        r#"{"b":2,"a":1}"#
    );
}
