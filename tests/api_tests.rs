//! Integration tests for the standard endpoints and app plumbing.

use actix_web::{App, test, web};
use weather_history_api::{create_base_app, health, version};

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(App::new().route("/api/health", web::get().to(health))).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("healthy"));
}

#[actix_web::test]
async fn test_version() {
    let app = test::init_service(App::new().route("/api/version", web::get().to(version))).await;

    let req = test::TestRequest::get().uri("/api/version").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains(env!("CARGO_PKG_VERSION")));
}

#[actix_web::test]
async fn base_app_serves_the_openapi_spec() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/spec/v2").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("Weather History API"));
}

#[actix_web::test]
async fn responses_carry_a_request_id() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-request-id"));
}

#[actix_web::test]
async fn provided_request_id_is_echoed_back() {
    let app = test::init_service(create_base_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header(("X-Request-ID", "trace-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");
}
