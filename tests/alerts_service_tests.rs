use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use stockwatch::client::ApiClient;
use stockwatch::models::{Alert, AlertType};
use stockwatch::services::alerts_service;
use stockwatch::session::MemorySessionStore;
use stockwatch::{AppState, config};

fn test_state(base_url: &str) -> AppState {
    let mut settings = config::load();
    settings.api_base_url = base_url.to_string();

    let store = Arc::new(MemorySessionStore::new());
    let api = ApiClient::new(&settings, store.clone()).expect("api client");

    AppState {
        settings,
        api,
        session: store,
    }
}

fn alert_json(id: i64, read: bool) -> serde_json::Value {
    json!({
        "id": id,
        "symbol": "TSLA",
        "currentPrice": 251.3,
        "thresholdPrice": 250.0,
        "alertType": "MAX_PRICE_EXCEEDED",
        "triggeredAt": "2024-02-01T09:30:00",
        "read": read
    })
}

fn alert(id: i64, read: bool) -> Alert {
    serde_json::from_value(alert_json(id, read)).expect("alert fixture")
}

#[tokio::test]
async fn list_passes_pagination_parameters_verbatim() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("GET"))
        .and(path("/alerts"))
        .and(query_param("page", "2"))
        .and(query_param("size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([alert_json(1, false)])))
        .expect(1)
        .mount(&server)
        .await;

    let alerts = alerts_service::list(&state, 2, 5).await.expect("list");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::MaxPriceExceeded);
    assert_eq!(alerts[0].threshold_price, 250.0);
    assert!(!alerts[0].read);
}

#[tokio::test]
async fn list_unread_hits_the_filter_endpoint() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("GET"))
        .and(path("/alerts/unread"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 3,
                "symbol": "AAPL",
                "currentPrice": 148.2,
                "thresholdPrice": 150.0,
                "alertType": "MIN_PRICE_EXCEEDED",
                "triggeredAt": "2024-02-02T15:45:00",
                "read": false
            }
        ])))
        .mount(&server)
        .await;

    let alerts = alerts_service::list_unread(&state).await.expect("unread");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::MinPriceExceeded);
}

#[tokio::test]
async fn unread_count_returns_the_backend_value() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("GET"))
        .and(path("/alerts/unread/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(7)))
        .mount(&server)
        .await;

    assert_eq!(alerts_service::unread_count(&state).await, 7);
}

#[tokio::test]
async fn unread_count_reads_zero_when_the_backend_is_unreachable() {
    // nothing listens on port 1
    let state = test_state("http://127.0.0.1:1");

    assert_eq!(alerts_service::unread_count(&state).await, 0);
}

#[tokio::test]
async fn unread_count_reads_zero_on_a_server_error() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("GET"))
        .and(path("/alerts/unread/count"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(alerts_service::unread_count(&state).await, 0);
}

#[tokio::test]
async fn marking_the_same_ids_twice_succeeds_both_times() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("PUT"))
        .and(path("/alerts/mark-read"))
        .and(body_json(json!([1, 2])))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    alerts_service::mark_as_read(&state, &[1, 2])
        .await
        .expect("first mark");
    alerts_service::mark_as_read(&state, &[1, 2])
        .await
        .expect("second mark");
}

#[tokio::test]
async fn mark_all_sends_only_the_unread_ids() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("PUT"))
        .and(path("/alerts/mark-read"))
        .and(body_json(json!([2, 4])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let alerts = vec![alert(1, true), alert(2, false), alert(3, true), alert(4, false)];
    let marked = alerts_service::mark_all_as_read(&state, &alerts)
        .await
        .expect("mark all");

    assert_eq!(marked, 2);
}

#[tokio::test]
async fn mark_all_skips_the_network_when_nothing_is_unread() {
    let server = MockServer::start().await;
    let state = test_state(&server.uri());

    Mock::given(method("PUT"))
        .and(path("/alerts/mark-read"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let alerts = vec![alert(1, true), alert(2, true)];
    let marked = alerts_service::mark_all_as_read(&state, &alerts)
        .await
        .expect("mark all");

    assert_eq!(marked, 0);
}
