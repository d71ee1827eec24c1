//! Health and Metrics API Tests

use axum::http::StatusCode;
use serde_json::Value;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::seeded();

    let response = app.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::seeded();

    let response = app.get("/health/live").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_catalog_size() {
    let app = TestApp::seeded();

    let response = app.get("/health/ready").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["products"], 2);
}

#[tokio::test]
async fn test_metrics_endpoint_records_routes() {
    let app = TestApp::seeded();
    app.get("/catalog/").await;

    let response = app.get("/metrics").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("product_catalog_http_requests_total"));
    assert!(body.contains("path=\"/catalog/\""));
}

#[tokio::test]
async fn test_unknown_route_returns_html_404() {
    let app = TestApp::seeded();

    let response = app.get("/no/such/page").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}
