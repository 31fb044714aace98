//! Live tests against api.songkick.com (requires SONGKICK_API_KEY).

use super::common::live_client;
use songkick_api::{EventSearchOptions, Location, ResultsPageExt, SearchOptions};

#[tokio::test]
#[ignore = "requires SONGKICK_API_KEY"]
async fn test_live_get_event() {
    let response = live_client()
        .get_event(27989954)
        .await
        .expect("get_event should succeed");

    assert_eq!(response.status(), 200);
    let page = response
        .results_page::<serde_json::Value>()
        .expect("resultsPage envelope");
    assert!(page.is_ok(), "service reported: {:?}", page.error_message());
}

#[tokio::test]
#[ignore = "requires SONGKICK_API_KEY"]
async fn test_live_find_artists() {
    let response = live_client()
        .find_artists("Radiohead", &SearchOptions::default().per_page(5))
        .await
        .expect("find_artists should succeed");

    assert!(response.is_success());
    let page = response
        .results_page::<serde_json::Value>()
        .expect("resultsPage envelope");
    assert_eq!(page.per_page, Some(5));
}

#[tokio::test]
#[ignore = "requires SONGKICK_API_KEY"]
async fn test_live_find_events_by_metro_area() {
    let response = live_client()
        .find_events(&Location::MetroArea(24426), &EventSearchOptions::default())
        .await
        .expect("find_events should succeed");

    assert!(response.is_success());
}
