//! Catalog API Tests
//!
//! Drive the catalog pages end to end and check the rendered HTML.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::common::TestApp;

#[tokio::test]
async fn test_homepage_renders() {
    let app = TestApp::empty();

    let response = app.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("Product Catalog"));
}

#[tokio::test]
async fn test_catalog_lists_debug_products() {
    let app = TestApp::seeded();

    let response = app.get("/catalog/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Product 1"));
    assert!(html.contains("Descr Second"));
    assert_eq!(app.catalog_size().await, 2);
}

#[tokio::test]
async fn test_show_add_form_is_blank() {
    let app = TestApp::seeded();

    let response = app.get("/show_form_add_product/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("action=\"/add_product/\""));
    assert!(!html.contains("class=\"message\""));
}

#[tokio::test]
async fn test_add_product_to_empty_catalog() {
    let app = TestApp::empty();

    let response = app.add_product("Widget", "A widget", "9.99").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Product Widget added."));
    assert!(html.contains("name=\"title\" value=\"\""));

    let catalog = app.get("/catalog/").await.text();
    assert!(catalog.contains("<td>1</td>"));
    assert!(catalog.contains("<td>Widget</td>"));
    assert!(catalog.contains("<td>A widget</td>"));
    assert!(catalog.contains("<td>9.99</td>"));
}

#[test_case("abc" ; "not a number")]
#[test_case("0" ; "zero")]
#[test_case("-5" ; "negative")]
#[tokio::test]
async fn test_add_product_invalid_price_echoes_input(price: &str) {
    let app = TestApp::seeded();

    let response = app.add_product("Widget", "Shiny", price).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Product price must be positive number!"));
    assert!(html.contains("value=\"Widget\""));
    assert!(html.contains(">Shiny</textarea>"));
    assert!(html.contains(&format!("name=\"price\" value=\"{price}\"")));
    assert_eq!(app.catalog_size().await, 2);
}

#[tokio::test]
async fn test_add_duplicate_title_is_rejected() {
    let app = TestApp::empty();
    app.add_product("Widget", "A widget", "9.99").await;

    let response = app.add_product("Widget", "dup", "5").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Product Widget already in catalog!"));
    assert!(html.contains(">dup</textarea>"));
    assert_eq!(app.catalog_size().await, 1);
}

#[tokio::test]
async fn test_add_blank_title_is_rejected() {
    let app = TestApp::empty();

    let response = app.add_product("   ", "desc", "5").await;

    response.assert_status_ok();
    assert!(response.text().contains("Product title must not be empty!"));
    assert_eq!(app.catalog_size().await, 0);
}

#[tokio::test]
async fn test_add_missing_field_is_rejected_by_form_decoding() {
    let app = TestApp::empty();

    let response = app
        .server
        .post("/add_product/")
        .form(&[("title", "Widget")])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(app.catalog_size().await, 0);
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::seeded();

    let response = app.get("/delete_product/1").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Product Product 1 (id=1) deleted."));
    assert!(!html.contains("Descr First"));
    assert!(html.contains("Descr Second"));
    assert_eq!(app.catalog_size().await, 1);
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let app = TestApp::seeded();
    app.get("/delete_product/1").await;

    let response = app.get("/delete_product/1").await;

    response.assert_status_ok();
    assert!(response.text().contains("Product id=1 not found!"));
    assert_eq!(app.catalog_size().await, 1);
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let app = TestApp::seeded();

    let response = app.get("/delete_product/99").await;

    response.assert_status_ok();
    assert!(response.text().contains("Product id=99 not found!"));
    assert_eq!(app.catalog_size().await, 2);
}

#[tokio::test]
async fn test_delete_non_integer_id_is_bad_request() {
    let app = TestApp::seeded();

    let response = app.get("/delete_product/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Product id must be an integer"));
    assert_eq!(app.catalog_size().await, 2);
}

#[tokio::test]
async fn test_id_is_reused_after_deleting_highest() {
    let app = TestApp::seeded();
    app.get("/delete_product/2").await;

    app.add_product("Widget", "A widget", "1").await;

    let html = app.get("/catalog/").await.text();
    assert!(html.contains("/delete_product/2"));
    assert!(html.contains("<td>Widget</td>"));
}
