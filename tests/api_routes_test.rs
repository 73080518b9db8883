mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn inventory_search_finds_insulin_pen() {
    let app = TestApp::new().await;
    let res = app.get("/inventory?search=insulin").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["success"], true);
    let items = res.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Insulin Pen");
    assert_eq!(items[0]["availability"], "critical");
    assert_eq!(items[0]["verification_path"], "/inventory/3/verification");
    assert!(res.body["data"]["empty_state"].is_null());
}

#[tokio::test]
async fn inventory_pagination_keeps_summary_over_full_subset() {
    let app = TestApp::new().await;
    let res = app.get("/inventory?page=2&per_page=2").await;

    assert_eq!(res.status, StatusCode::OK);
    let data = &res.body["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["pagination"]["total"], 5);
    assert_eq!(data["pagination"]["total_pages"], 3);
    assert_eq!(data["summary"]["matched"], 5);
}

#[tokio::test]
async fn zero_page_is_a_validation_error() {
    let app = TestApp::new().await;
    let res = app.get("/expenses?page=0").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn usage_logs_for_emergency_department() {
    let app = TestApp::new().await;
    let res = app.get("/usage-logs?department=Emergency").await;

    assert_eq!(res.status, StatusCode::OK);
    let items = res.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["patient_id"], "P-2024-001");
    assert_eq!(items[0]["cost"], "0.30");
}

#[tokio::test]
async fn unknown_date_keyword_yields_empty_state() {
    let app = TestApp::new().await;
    let res = app.get("/usage-logs?date=fortnight").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(
        res.body["data"]["empty_state"],
        "No usage logs found matching your criteria"
    );
}

#[tokio::test]
async fn suppliers_split_by_recommendation() {
    let app = TestApp::new().await;
    let res = app.get("/suppliers").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["recommended"].as_array().unwrap().len(), 3);
    assert_eq!(res.body["data"]["other"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn expenses_filter_by_status() {
    let app = TestApp::new().await;
    let res = app.get("/expenses?status=pending").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["summary"]["count"], 1);
    assert_eq!(res.body["data"]["summary"]["currency"], "USD");
}

#[tokio::test]
async fn dashboard_and_analytics_render() {
    let app = TestApp::new().await;

    let dashboard = app.get("/").await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert_eq!(dashboard.body["data"]["kpis"]["shortage_alerts"], 3);

    let analytics = app.get("/analytics").await;
    assert_eq!(analytics.status, StatusCode::OK);
    assert_eq!(
        analytics.body["data"]["predictions"].as_array().unwrap().len(),
        3
    );
}

#[tokio::test]
async fn verification_of_unknown_medicine_is_not_found() {
    let app = TestApp::new().await;
    let res = app.get("/inventory/99/verification").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Not Found");
    assert!(res.body["request_id"].is_string());
}

#[tokio::test]
async fn issued_record_verifies_as_simulated() {
    let app = TestApp::new().await;
    let issued = app.get("/analytics/predictions/1/verification").await;
    assert_eq!(issued.status, StatusCode::OK);
    let record = issued.body["data"].clone();
    assert_eq!(record["item_name"], "AI Prediction - Paracetamol 500mg");
    assert_eq!(record["item_kind"], "prediction");

    let verified = app.post("/verification", Some(record.clone())).await;
    assert_eq!(verified.status, StatusCode::OK);
    assert_eq!(verified.body["data"]["verified"], true);
    assert_eq!(verified.body["data"]["simulated"], true);
    assert_eq!(
        verified.body["data"]["record"]["transaction_hash"],
        record["transaction_hash"]
    );
}

#[tokio::test]
async fn unsupported_speed_is_rejected() {
    let app = TestApp::new().await;
    let res = app
        .post("/simulation/speed", Some(json!({ "speed": 3.0 })))
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.state.simulation.snapshot().speed.multiplier(), 1.0);
}

#[tokio::test]
async fn simulation_controls_round_trip() {
    let app = TestApp::new().await;

    let paused = app.post("/simulation/pause", None).await;
    assert_eq!(paused.status, StatusCode::OK);
    assert_eq!(paused.body["data"]["state"], "paused");

    let faster = app
        .post("/simulation/speed", Some(json!({ "speed": 4 })))
        .await;
    assert_eq!(faster.status, StatusCode::OK);
    assert_eq!(faster.body["data"]["speed"], 4.0);
    assert_eq!(faster.body["data"]["state"], "paused");

    let reset = app.post("/simulation/reset", None).await;
    assert_eq!(reset.body["data"]["state"], "running");
    assert_eq!(reset.body["data"]["speed"], 1.0);
    assert_eq!(reset.body["data"]["tick"], 0);

    let twin = app.get("/simulation").await;
    assert_eq!(twin.status, StatusCode::OK);
    assert_eq!(twin.body["data"]["departments"].as_array().unwrap().len(), 5);
    assert_eq!(twin.body["data"]["live"]["metrics"]["active_departments"], 5);
}

#[tokio::test]
async fn health_reports_simulation_component() {
    let app = TestApp::new().await;
    let res = app.get("/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "up");
    assert_eq!(res.body["details"]["simulation"]["status"], "up");
}

#[tokio::test]
async fn unknown_route_is_not_found_with_request_id_header() {
    let app = TestApp::new().await;
    let res = app.get("/no-such-page").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "Not found: No page at /no-such-page");
    assert!(res.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn mistyped_speed_uses_the_error_envelope() {
    let app = TestApp::new().await;
    let res = app
        .post("/simulation/speed", Some(json!({ "speed": "fast" })))
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Bad Request");
    assert!(res.body["message"].as_str().unwrap().contains("speed"));
    assert!(res.body["request_id"].is_string());
    assert!(res.body["timestamp"].is_string());
    assert_eq!(app.state.simulation.snapshot().speed.multiplier(), 1.0);
}

#[tokio::test]
async fn non_numeric_page_uses_the_error_envelope() {
    let app = TestApp::new().await;
    let res = app.get("/inventory?page=abc").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Bad Request");
    assert!(res.body["request_id"].is_string());
    assert!(res.body["timestamp"].is_string());
}

#[tokio::test]
async fn non_numeric_medicine_id_uses_the_error_envelope() {
    let app = TestApp::new().await;
    let res = app.get("/inventory/abc/verification").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Bad Request");
    assert!(res.body["request_id"].is_string());
}

#[tokio::test]
async fn availability_filter_accepts_variant_names() {
    let app = TestApp::new().await;
    for status in ["LowStock", "low-stock", "Low%20Stock"] {
        let res = app.get(&format!("/inventory?status={}", status)).await;
        assert_eq!(res.status, StatusCode::OK);
        let items = res.body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1, "status={}", status);
        assert_eq!(items[0]["availability"], "low-stock");
    }
}
