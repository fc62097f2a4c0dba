use actix_web::test;
use serde_json::json;
use serial_test::serial;

mod common;

use common::TestApp;

// The auth middleware reads RUST_ENV per request; these tests flip it, so
// they are serialized.

#[actix_web::test]
#[serial]
async fn test_missing_required_fields_returns_400() {
    std::env::set_var("RUST_ENV", "development");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/calculate-pricing")
        .set_json(&json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("service_type_id"));
    assert!(error.contains("vehicle_id"));
    assert!(error.contains("duration_hours"));
}

#[actix_web::test]
#[serial]
async fn test_missing_vehicle_id_is_named_in_the_error() {
    std::env::set_var("RUST_ENV", "development");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    // No database is reachable in this test run, so a 400 here also shows
    // validation fires before any pricing lookup is attempted.
    let req = test::TestRequest::post()
        .uri("/api/bookings/calculate-pricing")
        .set_json(&json!({
            "service_type_id": "charter",
            "duration_hours": 8
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("vehicle_id"));
    assert!(!error.contains("service_type_id"));
}

#[actix_web::test]
#[serial]
async fn test_zero_duration_hours_returns_400() {
    std::env::set_var("RUST_ENV", "development");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/calculate-pricing")
        .set_json(&json!({
            "service_type_id": "charter",
            "vehicle_id": "v1",
            "duration_hours": 0
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("duration_hours"));
}

#[actix_web::test]
#[serial]
async fn test_unauthenticated_request_in_production_returns_401() {
    std::env::set_var("RUST_ENV", "production");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings/calculate-pricing")
        .set_json(&json!({
            "service_type_id": "charter",
            "vehicle_id": "v1",
            "duration_hours": 8
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");

    std::env::set_var("RUST_ENV", "development");
}

#[actix_web::test]
#[serial]
async fn test_dev_mode_bypasses_auth() {
    std::env::set_var("RUST_ENV", "development");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    // No Authorization header, but dev mode lets the request through to
    // validation instead of rejecting it with 401.
    let req = test::TestRequest::post()
        .uri("/api/bookings/calculate-pricing")
        .set_json(&json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
#[serial]
async fn test_validate_coupon_requires_code() {
    std::env::set_var("RUST_ENV", "development");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/validate-coupon")
        .set_json(&json!({ "amount": 10000 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("code"));
}

#[actix_web::test]
#[serial]
async fn test_validate_coupon_requires_amount() {
    std::env::set_var("RUST_ENV", "development");
    let test_app = TestApp::new().await;
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/validate-coupon")
        .set_json(&json!({ "code": "SUMMER20" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("amount"));
}
