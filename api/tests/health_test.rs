//! Tests for the health probe and fallback routes

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use linka_api::create_app;
use common::harness;

#[actix_web::test]
async fn test_health_check() {
    let h = harness(&[]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "linka-api");
    assert_eq!(body["mail_provider"], "Mock");
}

#[actix_web::test]
async fn test_unknown_route_is_json_not_found() {
    let h = harness(&[]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/v1/auth/send-code").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
