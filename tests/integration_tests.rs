//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: parameters → search URL → HTTP requests →
//! pagination bookkeeping → place names.

use placefinder::{ClientConfig, Error, Page, PlaceSearchClient, SearchParams};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .api_key("test-key")
        .search_endpoint(format!("{}/textsearch/json", server.uri()))
        .details_endpoint(format!("{}/details/json", server.uri()))
        .build()
}

/// Mount page one: only search requests carry the `types` filter
async fn mount_first_page(server: &MockServer, names: &[&str], token: Option<&str>) {
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("sensor", "false"))
        .and(query_param("types", "establishment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": names.iter().map(|n| json!({"name": n})).collect::<Vec<_>>(),
            "next_page_token": token,
        })))
        .mount(server)
        .await;
}

/// Mount a token-fetched page; more specific than the first-page mock
async fn mount_token_page(server: &MockServer, token: &str, names: &[&str], next: Option<&str>) {
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("pagetoken", token))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": names.iter().map(|n| json!({"name": n})).collect::<Vec<_>>(),
            "next_page_token": next,
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Search and Forward Pagination
// ============================================================================

#[tokio::test]
async fn test_two_page_scenario() {
    let mock_server = MockServer::start().await;
    mount_token_page(&mock_server, "TOK1", &["Cafe B"], None).await;
    mount_first_page(&mock_server, &["Cafe A"], Some("TOK1")).await;

    let params = SearchParams::new().address("Portland, OR").keywords("coffee");
    let mut client = PlaceSearchClient::with_params(mock_config(&mock_server), params).unwrap();

    // Page one via the text query
    let names = client.search().await.unwrap();
    assert_eq!(names, vec!["Cafe A"]);
    assert!(!client.is_exhausted());

    // Page two via TOK1; no token on it, so the session is exhausted
    assert_eq!(
        client.next_page().await.unwrap(),
        Page::Names(vec!["Cafe B".to_string()])
    );
    assert!(client.is_exhausted());

    // Forward past the end: distinct signal, no request
    assert_eq!(client.next_page().await.unwrap(), Page::End);

    // Backward returns the cached first page without a request
    assert_eq!(
        client.previous_page().await.unwrap(),
        Page::Names(vec!["Cafe A".to_string()])
    );
}

#[tokio::test]
async fn test_search_url_carries_query_radius_and_types() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "coffee establishment near Portland, OR"))
        .and(query_param("radius", "500"))
        .and(query_param("types", "establishment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{"name": "Cafe A"}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = SearchParams::new()
        .address("Portland, OR")
        .keywords("coffee")
        .radius(500);
    let mut client = PlaceSearchClient::with_params(mock_config(&mock_server), params).unwrap();

    assert_eq!(client.search().await.unwrap(), vec!["Cafe A"]);
}

#[tokio::test]
async fn test_page_request_has_token_as_sole_qualifier() {
    let mock_server = MockServer::start().await;
    mount_token_page(&mock_server, "TOK1", &["Cafe B"], None).await;
    mount_first_page(&mock_server, &["Cafe A"], Some("TOK1")).await;

    let params = SearchParams::new().keywords("coffee");
    let mut client = PlaceSearchClient::with_params(mock_config(&mock_server), params).unwrap();

    client.search().await.unwrap();
    client.next_page().await.unwrap();

    let url = client.last_url().unwrap();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("key".to_string(), "test-key".to_string()),
            ("sensor".to_string(), "false".to_string()),
            ("pagetoken".to_string(), "TOK1".to_string()),
        ]
    );
}

// ============================================================================
// Backward Pagination
// ============================================================================

#[tokio::test]
async fn test_round_trip_from_third_page() {
    let mock_server = MockServer::start().await;
    mount_token_page(&mock_server, "TOK1", &["Cafe B"], Some("TOK2")).await;
    mount_token_page(&mock_server, "TOK2", &["Cafe C"], None).await;
    mount_first_page(&mock_server, &["Cafe A"], Some("TOK1")).await;

    let params = SearchParams::new().keywords("coffee");
    let mut client = PlaceSearchClient::with_params(mock_config(&mock_server), params).unwrap();

    assert_eq!(client.search().await.unwrap(), vec!["Cafe A"]);
    assert_eq!(
        client.next_page().await.unwrap(),
        Page::Names(vec!["Cafe B".to_string()])
    );
    assert_eq!(
        client.next_page().await.unwrap(),
        Page::Names(vec!["Cafe C".to_string()])
    );

    // Backward from page three re-fetches page two by TOK1
    assert_eq!(
        client.previous_page().await.unwrap(),
        Page::Names(vec!["Cafe B".to_string()])
    );

    // And again back to the cached first page
    assert_eq!(
        client.previous_page().await.unwrap(),
        Page::Names(vec!["Cafe A".to_string()])
    );

    // Forward works again after rewinding
    assert_eq!(
        client.next_page().await.unwrap(),
        Page::Names(vec!["Cafe B".to_string()])
    );
}

#[tokio::test]
async fn test_previous_page_at_first_page_is_idempotent() {
    let mock_server = MockServer::start().await;
    mount_first_page(&mock_server, &["Cafe A"], Some("TOK1")).await;

    let params = SearchParams::new().keywords("coffee");
    let mut client = PlaceSearchClient::with_params(mock_config(&mock_server), params).unwrap();

    client.search().await.unwrap();

    // Only the search itself hits the network; both rewinds are served
    // from the cached first page
    for _ in 0..2 {
        assert_eq!(
            client.previous_page().await.unwrap(),
            Page::Names(vec!["Cafe A".to_string()])
        );
    }

    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

// ============================================================================
// New Search Resets the Session
// ============================================================================

#[tokio::test]
async fn test_new_search_resets_pagination() {
    let mock_server = MockServer::start().await;
    mount_first_page(&mock_server, &["Cafe A"], None).await;

    let params = SearchParams::new().keywords("coffee");
    let mut client = PlaceSearchClient::with_params(mock_config(&mock_server), params).unwrap();

    client.search().await.unwrap();
    assert!(client.is_exhausted());

    // A fresh search clears end-of-results and starts a new session
    client.search().await.unwrap();
    assert!(client.is_exhausted()); // this page also has no token
    assert_eq!(client.original().unwrap().place_names(), vec!["Cafe A"]);
}

// ============================================================================
// Details
// ============================================================================

#[tokio::test]
async fn test_details_by_reference() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("reference", "ChIJ_example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": {
                "name": "Cafe A",
                "formatted_address": "1 Main St, Portland, OR",
                "formatted_phone_number": "555-1234"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PlaceSearchClient::new(mock_config(&mock_server)).unwrap();
    let details = client.details("ChIJ_example").await.unwrap();

    assert_eq!(details.status, "OK");
    assert_eq!(details.result["formatted_phone_number"], "555-1234");

    // The details request never carries search parameters
    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert!(query.contains("reference=ChIJ_example"));
    assert!(!query.contains("radius"));
    assert!(!query.contains("query="));
}

// ============================================================================
// Failure Surfaces
// ============================================================================

#[tokio::test]
async fn test_api_status_error_surfaces_exact_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let mut client = PlaceSearchClient::new(mock_config(&mock_server)).unwrap();
    let err = client.search().await.unwrap_err();

    match err {
        Error::ApiStatus { status } => assert_eq!(status, "REQUEST_DENIED"),
        other => panic!("expected ApiStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_failure_surfaces_as_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1) // no retries
        .mount(&mock_server)
        .await;

    let mut client = PlaceSearchClient::new(mock_config(&mock_server)).unwrap();
    let err = client.search().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
}
