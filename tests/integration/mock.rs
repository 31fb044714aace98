//! End-to-end tests against a local wiremock server.

use super::common::{mock_client, unreachable_client, TEST_KEY};
use chrono::NaiveDate;
use serde_json::json;
use songkick_api::{
    ArtistId, Body, EventSearchOptions, GigographyOptions, Location, Order, ResultsPageExt,
    SearchOptions, Songkick,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn results_page(results: serde_json::Value) -> serde_json::Value {
    json!({
        "resultsPage": {
            "status": "ok",
            "results": results,
            "perPage": 50,
            "page": 1,
            "totalEntries": 1
        }
    })
}

// ============================================================================
// Endpoints
// ============================================================================

#[tokio::test]
async fn test_get_event_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events/27989954.json"))
        .and(query_param("apikey", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({
            "event": { "id": 27989954, "displayName": "Radiohead at O2 Arena" }
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let response = mock_client(&server)
        .get_event(27989954)
        .await
        .expect("get_event should succeed");

    assert_eq!(response.status(), 200);
    assert!(response.is_success());

    let page = response
        .results_page::<serde_json::Value>()
        .expect("resultsPage envelope");
    assert!(page.is_ok());
    assert_eq!(page.total_entries, Some(1));
    assert_eq!(
        page.results.expect("results")["event"]["displayName"],
        "Radiohead at O2 Arena"
    );

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("apikey=test-key"));
}

#[tokio::test]
async fn test_find_artists_sends_query_and_default_paging() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/search/artists.json"))
        .and(query_param("apikey", TEST_KEY))
        .and(query_param("query", "Sigur Rós"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({
            "artist": [{ "id": 253846, "displayName": "Sigur Rós" }]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let response = mock_client(&server)
        .find_artists("Sigur Rós", &SearchOptions::default())
        .await
        .expect("find_artists should succeed");

    assert_eq!(
        response.json().expect("json body")["resultsPage"]["results"]["artist"][0]["id"],
        253846
    );
}

#[tokio::test]
async fn test_find_events_forwards_location_and_date_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events.json"))
        .and(query_param("location", "geo:51.5,-0.12"))
        .and(query_param("min_date", "2024-06-01"))
        .and(query_param("max_date", "2024-06-30"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({ "event": [] }))))
        .expect(1)
        .mount(&server)
        .await;

    let options = EventSearchOptions::default().page(2).between(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
    );
    let location: Location = "geo:51.5,-0.12".parse().expect("valid location");

    let response = mock_client(&server)
        .find_events(&location, &options)
        .await
        .expect("find_events should succeed");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_find_events_half_date_range_is_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events.json"))
        .and(query_param_is_missing("min_date"))
        .and(query_param_is_missing("max_date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({ "event": [] }))))
        .expect(1)
        .mount(&server)
        .await;

    let options = EventSearchOptions {
        min_date: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..Default::default()
    };

    mock_client(&server)
        .find_events(&Location::MetroArea(24426), &options)
        .await
        .expect("find_events should succeed");
}

#[tokio::test]
async fn test_gigography_by_musicbrainz_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/api/3.0/artists/mbid:a74b1b7f-71a5-4011-9441-d0b5e4122711/gigography.json",
        ))
        .and(query_param("order", "desc"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({ "event": [] }))))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server)
        .find_events_by_artist(
            "a74b1b7f-71a5-4011-9441-d0b5e4122711",
            &GigographyOptions::default().order(Order::Desc),
        )
        .await
        .expect("find_events_by_artist should succeed");
}

#[tokio::test]
async fn test_gigography_defaults_to_ascending_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/artists/253846/gigography.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({ "event": [] }))))
        .mount(&server)
        .await;

    mock_client(&server)
        .find_events_by_artist(ArtistId::Songkick(253846), &GigographyOptions::default())
        .await
        .expect("find_events_by_artist should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(
        requests[0].url.query(),
        Some("apikey=test-key&page=1&per_page=50&order=asc")
    );
}

#[tokio::test]
async fn test_find_similar_artist_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/artists/253846/gigography.json"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({ "artist": [] }))))
        .expect(1)
        .mount(&server)
        .await;

    mock_client(&server)
        .find_similar_artist("253846", &SearchOptions::default().per_page(10))
        .await
        .expect("find_similar_artist should succeed");
}

#[tokio::test]
async fn test_get_venue_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/venues/17522.json"))
        .and(query_param("apikey", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(results_page(json!({
            "venue": { "id": 17522, "displayName": "O2 Academy Brixton" }
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let response = mock_client(&server)
        .get_venue(17522)
        .await
        .expect("get_venue should succeed");

    assert_eq!(response.json().unwrap()["resultsPage"]["results"]["venue"]["id"], 17522);
}

// ============================================================================
// Content negotiation and status handling
// ============================================================================

#[tokio::test]
async fn test_error_status_is_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events/1.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "resultsPage": { "status": "error", "error": { "message": "Event not found" } }
        })))
        .mount(&server)
        .await;

    let response = mock_client(&server)
        .get_event(1)
        .await
        .expect("non-2xx statuses are not errors");

    assert_eq!(response.status(), 404);
    assert!(!response.is_success());

    let page = response
        .results_page::<serde_json::Value>()
        .expect("error envelope parses");
    assert!(!page.is_ok());
    assert!(page.results.is_none());
    assert_eq!(page.error_message(), Some("Event not found"));
}

#[tokio::test]
async fn test_non_json_body_is_returned_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/venues/17522.json"))
        .respond_with(
            ResponseTemplate::new(503).set_body_raw("<html>maintenance</html>", "text/html"),
        )
        .mount(&server)
        .await;

    let response = mock_client(&server)
        .get_venue(17522)
        .await
        .expect("text bodies are returned");

    assert_eq!(response.status(), 503);
    assert_eq!(
        response.body(),
        Some(&Body::Text("<html>maintenance</html>".to_string()))
    );
    assert!(response.json().is_none());
}

#[tokio::test]
async fn test_hal_json_body_is_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"resultsPage":{"status":"ok","results":{}}}"#,
            "application/hal+json",
        ))
        .mount(&server)
        .await;

    let response = mock_client(&server).get_event(2).await.expect("hal+json");

    assert_eq!(response.json().unwrap()["resultsPage"]["status"], "ok");
}

#[tokio::test]
async fn test_empty_body_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events/3.json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = mock_client(&server).get_event(3).await.expect("empty body");

    assert_eq!(response.status(), 204);
    assert!(response.body().is_none());
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3.0/events/4.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let err = mock_client(&server)
        .get_event(4)
        .await
        .expect_err("malformed JSON must fail");

    assert!(!err.is_transport());
    assert!(!err.is_invalid_argument());
}

// ============================================================================
// Construction and transport failures
// ============================================================================

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let err = unreachable_client()
        .get_venue(17522)
        .await
        .expect_err("nothing is listening");

    assert!(err.is_transport(), "expected a transport error, got {err:?}");
}

#[test]
fn test_empty_api_key_is_rejected() {
    let err = Songkick::new("").expect_err("empty key must be rejected");
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("apiKey"));
}

#[test]
fn test_whitespace_api_key_is_accepted() {
    let client = Songkick::new("   ").expect("any non-empty key is accepted");
    assert_eq!(client.api_version(), "3.0");
}

#[test]
fn test_versions() {
    let client = Songkick::new(TEST_KEY).expect("client");

    assert_eq!(client.api_version(), "3.0");
    assert_eq!(client.client_version(), env!("CARGO_PKG_VERSION"));
}
