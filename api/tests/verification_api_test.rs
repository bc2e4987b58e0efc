//! End-to-end tests for the verification endpoints

mod common;

use actix_web::{http::StatusCode, test};
use chrono::Duration;
use serde_json::{json, Value};
use std::sync::Arc;

use linka_api::create_app;
use common::{harness, harness_with_store, BrokenStore};

#[actix_web::test]
async fn test_request_then_verify_round_trip() {
    let h = harness(&["482913"]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/request")
        .set_json(json!({ "email": "Ana@Uni.EDU" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true, "expires_in": 600 }));

    let sent = h.mail.last_sent_to("ana@uni.edu").expect("code was mailed");
    assert!(sent.body.contains("482913"));

    h.clock.advance(Duration::minutes(5));

    let verify = || {
        test::TestRequest::post()
            .uri("/verification/verify")
            .set_json(json!({ "email": "ana@uni.edu", "code": "482913" }))
            .to_request()
    };

    let body: Value = test::call_and_read_body_json(&app, verify()).await;
    assert_eq!(body["status"], "VERIFIED");

    let body: Value = test::call_and_read_body_json(&app, verify()).await;
    assert_eq!(body["status"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_reissue_invalidates_previous_code() {
    let h = harness(&["111111", "222222"]);
    let app = test::init_service(create_app(h.state.clone())).await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/verification/request")
            .set_json(json!({ "email": "a@b.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
    assert_eq!(h.mail.get_message_count(), 2);

    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .set_json(json!({ "email": "a@b.com", "code": "111111" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "MISMATCH");

    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .set_json(json!({ "email": "a@b.com", "code": "222222" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "VERIFIED");
}

#[actix_web::test]
async fn test_expired_code_reports_expired_then_not_found() {
    let h = harness(&["654321"]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/request")
        .set_json(json!({ "email": "x@y.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    h.clock.advance(Duration::minutes(11));

    let verify = || {
        test::TestRequest::post()
            .uri("/verification/verify")
            .set_json(json!({ "email": "x@y.com", "code": "654321" }))
            .to_request()
    };
    let body: Value = test::call_and_read_body_json(&app, verify()).await;
    assert_eq!(body["status"], "EXPIRED");

    let body: Value = test::call_and_read_body_json(&app, verify()).await;
    assert_eq!(body["status"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_verify_without_request_is_not_found() {
    let h = harness(&[]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .set_json(json!({ "email": "nobody@b.com", "code": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_invalid_email_is_validation_error() {
    let h = harness(&[]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/request")
        .set_json(json!({ "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"]["email"].is_array());
    assert!(body["timestamp"].is_string());
    assert_eq!(h.mail.get_message_count(), 0);
}

#[actix_web::test]
async fn test_short_code_is_validation_error() {
    let h = harness(&[]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .set_json(json!({ "email": "a@b.com", "code": "123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["details"]["code"].is_array());
}

#[actix_web::test]
async fn test_malformed_json_is_validation_error() {
    let h = harness(&[]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"email": "a@b.com"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn test_mail_failure_is_service_unavailable_and_code_kept() {
    let h = harness(&["482913"]);
    h.mail.set_simulate_failure(true);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/request")
        .set_json(json!({ "email": "a@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "mail_delivery_failed");

    // The record was stored before delivery was attempted
    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .set_json(json!({ "email": "a@b.com", "code": "482913" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "VERIFIED");
}

#[actix_web::test]
async fn test_store_failure_is_generic_server_error() {
    let h = harness_with_store(Arc::new(BrokenStore), &["482913"]);
    let app = test::init_service(create_app(h.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/verification/request")
        .set_json(json!({ "email": "a@b.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "persistence_error");
    assert!(!body["message"].as_str().unwrap().contains("connection refused"));
    assert_eq!(h.mail.get_message_count(), 0);

    let req = test::TestRequest::post()
        .uri("/verification/verify")
        .set_json(json!({ "email": "a@b.com", "code": "482913" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
