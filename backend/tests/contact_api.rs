//! HTTP-level tests for the contact submission and inbox endpoints.

mod common;

use axum::http::{header, StatusCode};
use common::{
    body_json, build_test_app, build_test_app_with_pool, get, post_json, post_json_from, post_raw,
    test_config, valid_submission, ADMIN_TOKEN,
};
use diesel::connection::SimpleConnection;
use luminar_backend::error::GENERIC_FAILURE;
use serde_json::json;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = build_test_app(test_config());
    let response = get(&app, "/api/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn valid_submission_is_stored_and_echoed() {
    let app = build_test_app(test_config());

    let response = post_json(&app, "/api/contact", valid_submission()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Ada Lovelace");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["projectType"], "Product launch");
    assert_eq!(json["message"], "We want a hero video that scrubs with the scroll.");
    assert!(json["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn submitted_fields_are_trimmed() {
    let app = build_test_app(test_config());
    let mut body = valid_submission();
    body["name"] = json!("   Ada Lovelace  ");

    let response = post_json(&app, "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["name"], "Ada Lovelace");
}

#[tokio::test]
async fn empty_email_is_rejected_with_field_error() {
    let app = build_test_app(test_config());
    let mut body = valid_submission();
    body["email"] = json!("");

    let response = post_json(&app, "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Validation failed");
    let fields = json["fields"].as_object().unwrap();
    assert!(fields.contains_key("email"));
    assert!(!fields.contains_key("name"));
    assert_eq!(fields["email"], json!(["Email is required"]));
}

#[tokio::test]
async fn malformed_email_gets_a_format_message() {
    let app = build_test_app(test_config());
    let mut body = valid_submission();
    body["email"] = json!("ada-at-example");

    let response = post_json(&app, "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["email"], json!(["Email must be a valid email address"]));
}

#[tokio::test]
async fn missing_keys_are_named_in_camel_case() {
    let app = build_test_app(test_config());

    let response = post_json(&app, "/api/contact", json!({ "name": "Ada" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields = json["fields"].as_object().unwrap();
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("projectType"));
    assert!(fields.contains_key("message"));
    assert!(!fields.contains_key("name"));
}

#[tokio::test]
async fn rejected_submission_is_not_stored() {
    let app = build_test_app(test_config());
    let mut body = valid_submission();
    body["message"] = json!("   ");
    post_json(&app, "/api/contact", body).await;

    let response = get(&app, "/api/contact", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn inbox_requires_a_token() {
    let app = build_test_app(test_config());

    let response = get(&app, "/api/contact", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn inbox_rejects_a_wrong_token() {
    let app = build_test_app(test_config());
    post_json(&app, "/api/contact", valid_submission()).await;

    let response = get(&app, "/api/contact", Some("not-the-token")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid token");
}

#[tokio::test]
async fn inbox_lists_stored_submissions_with_the_right_token() {
    let app = build_test_app(test_config());

    let first = body_json(post_json(&app, "/api/contact", valid_submission()).await).await;
    let mut other = valid_submission();
    other["name"] = json!("Grace Hopper");
    other["email"] = json!("grace@example.com");
    let second = body_json(post_json(&app, "/api/contact", other).await).await;

    let response = get(&app, "/api/contact", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let listed = body_json(response).await;
    assert_eq!(listed, json!([second, first]));
}

#[tokio::test]
async fn inbox_lists_newest_first() {
    let app = build_test_app(test_config());

    let posted: Vec<String> = (0..8).map(|i| format!("Client {}", i)).collect();
    for name in &posted {
        let mut body = valid_submission();
        body["name"] = json!(name);
        let response = post_json(&app, "/api/contact", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed = body_json(get(&app, "/api/contact", Some(ADMIN_TOKEN)).await).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = posted.iter().rev().map(String::as_str).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn inbox_without_configured_secret_is_unavailable() {
    let mut config = test_config();
    config.admin_token = None;
    let app = build_test_app(config);

    let response = get(&app, "/api/contact", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn submissions_over_the_quota_are_throttled() {
    let mut config = test_config();
    config.contact_rate_limit_per_minute = std::num::NonZeroU32::new(2).unwrap();
    let app = build_test_app(config);

    for _ in 0..2 {
        let response = post_json(&app, "/api/contact", valid_submission()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let response = post_json(&app, "/api/contact", valid_submission()).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Reads are not counted against the submission quota.
    let response = get(&app, "/api/contact", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn forged_forwarded_for_does_not_reset_the_quota() {
    let mut config = test_config();
    config.contact_rate_limit_per_minute = std::num::NonZeroU32::new(1).unwrap();
    let app = build_test_app(config);

    let response = post_json_from(&app, valid_submission(), "198.51.100.1").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = post_json_from(&app, valid_submission(), "198.51.100.2").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn trusted_proxy_clients_get_their_own_quota() {
    let mut config = test_config();
    config.contact_rate_limit_per_minute = std::num::NonZeroU32::new(1).unwrap();
    config.trust_forwarded_for = true;
    let app = build_test_app(config);

    let response = post_json_from(&app, valid_submission(), "198.51.100.1").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = post_json_from(&app, valid_submission(), "198.51.100.2").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = post_json_from(&app, valid_submission(), "198.51.100.1").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
}

async fn assert_json_error(response: axum::http::Response<axum::body::Body>, status: StatusCode) {
    assert_eq!(response.status(), status);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"), "got {}", content_type);
    let json = body_json(response).await;
    assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn malformed_json_gets_a_json_error() {
    let app = build_test_app(test_config());
    let response = post_raw(&app, Some("application/json"), "{not json").await;
    assert_json_error(response, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn wrongly_typed_field_gets_a_json_error() {
    let app = build_test_app(test_config());
    let mut body = valid_submission();
    body["email"] = json!(5);
    let response = post_raw(&app, Some("application/json"), &body.to_string()).await;
    assert_json_error(response, StatusCode::UNPROCESSABLE_ENTITY).await;
}

#[tokio::test]
async fn missing_content_type_gets_a_json_error() {
    let app = build_test_app(test_config());
    let response = post_raw(&app, None, &valid_submission().to_string()).await;
    assert_json_error(response, StatusCode::UNSUPPORTED_MEDIA_TYPE).await;
}

#[tokio::test]
async fn storage_failure_returns_a_generic_error() {
    let (app, pool) = build_test_app_with_pool(test_config());
    pool.get()
        .unwrap()
        .batch_execute("DROP TABLE contact_submissions;")
        .unwrap();

    let response = post_json(&app, "/api/contact", valid_submission()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": GENERIC_FAILURE }));

    let response = get(&app, "/api/contact", Some(ADMIN_TOKEN)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": GENERIC_FAILURE }));
}
