//! # faqbot HTTP API Integration Tests
//!
//! File: cli/tests/api.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives the Axum router in-process with `tower::ServiceExt::oneshot`.
//! Each test builds its own state, so conversation logs never leak between
//! tests.
//!

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use faqbot::api::{create_router, AppState};
use faqbot::conversation::{ConversationLog, InMemoryLog};
use faqbot::core::config::Config;
use faqbot::intents::{Catalog, DEFAULT_FALLBACK_MESSAGE, DEFAULT_WELCOME_MESSAGE};
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

// =============================================================================
// Helpers
// =============================================================================

struct TestApp {
    router: axum::Router,
    log: Arc<InMemoryLog>,
    _static_dir: TempDir,
}

fn make_app() -> TestApp {
    make_app_with(Config::default(), Catalog::builtin())
}

/// Builds a router over a temporary static dir holding `index.html` and
/// `script.js`.
fn make_app_with(mut config: Config, catalog: Catalog) -> TestApp {
    let static_dir = tempdir().unwrap();
    fs::write(
        static_dir.path().join("index.html"),
        "<html><body>faqbot test page</body></html>",
    )
    .unwrap();
    fs::write(static_dir.path().join("script.js"), "console.log('hi');").unwrap();
    config.server.static_dir = static_dir.path().to_path_buf();

    let log = Arc::new(InMemoryLog::new());
    let state = AppState::new(&config, catalog, log.clone());
    TestApp {
        router: create_router(state),
        log,
        _static_dir: static_dir,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(resp: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

async fn chat(app: &TestApp, message: Value) -> (StatusCode, Value) {
    let body = json!({ "message": message }).to_string();
    let resp = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", &body))
        .await
        .unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

// =============================================================================
// POST /api/chat
// =============================================================================

#[tokio::test]
async fn test_chat_matches_shipping() {
    let app = make_app();
    let (status, body) = chat(&app, json!("I want to track my package")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent_id"], "shipping");
    let expected = Catalog::builtin().find_by_id("shipping").unwrap().response.clone();
    assert_eq!(body["response"], expected);
}

#[tokio::test]
async fn test_chat_overlapping_keywords() {
    let app = make_app();
    let (status, body) = chat(&app, json!("forgot password please help")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["intent_id"], "password");
}

#[tokio::test]
async fn test_chat_fallback_has_null_intent() {
    let app = make_app();
    let (status, body) = chat(&app, json!("What is the weather like today")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], DEFAULT_FALLBACK_MESSAGE);
    assert!(body["intent_id"].is_null());
    assert!(body.as_object().unwrap().contains_key("intent_id"));
}

#[tokio::test]
async fn test_chat_empty_message_is_400() {
    let app = make_app();
    for message in [json!(""), json!("   \n\t"), Value::Null] {
        let (status, body) = chat(&app, message).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Message cannot be empty" }));
    }
    assert!(app.log.is_empty());
}

#[tokio::test]
async fn test_chat_missing_message_is_400() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", "{}"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Message cannot be empty" })
    );
}

#[tokio::test]
async fn test_chat_malformed_body_is_400() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(post_json("/api/chat", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_chat_logs_every_turn() {
    let app = make_app();
    chat(&app, json!("  I'd like a refund  ")).await;
    chat(&app, json!("hello there")).await;

    let turns = app.log.turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].user_message, "I'd like a refund");
    assert_eq!(turns[0].matched_intent_id.as_deref(), Some("return"));
    assert_eq!(turns[1].matched_intent_id, None);
    assert_eq!(turns[1].bot_response, DEFAULT_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_chat_uses_configured_fallback() {
    let mut config = Config::default();
    config.messages.fallback = "Please email support@example.com.".to_string();
    let app = make_app_with(config, Catalog::builtin());

    let (_, body) = chat(&app, json!("xyzzy")).await;
    assert_eq!(body["response"], "Please email support@example.com.");
}

#[tokio::test]
async fn test_chat_with_custom_catalog() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[intents]]
        id = "first"
        name = "First"
        keywords = ["abcd"]
        response = "one"

        [[intents]]
        id = "second"
        name = "Second"
        keywords = ["wxyz"]
        response = "two"
        "#,
    )
    .unwrap();
    let app = make_app_with(Config::default(), catalog);

    // Equal scores: the earlier intent wins.
    let (_, body) = chat(&app, json!("wxyz abcd")).await;
    assert_eq!(body["intent_id"], "first");
}

// =============================================================================
// GET /api/quick-action/{intent_id}
// =============================================================================

#[tokio::test]
async fn test_quick_action_known_intent() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(get("/api/quick-action/payment"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["intent_name"], "Payment Methods");
    assert!(body["response"]
        .as_str()
        .unwrap()
        .contains("Payment Methods"));
}

#[tokio::test]
async fn test_quick_action_unknown_intent_is_404() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(get("/api/quick-action/nonexistent"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Intent not found" }));
}

#[tokio::test]
async fn test_quick_action_is_case_sensitive() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(get("/api/quick-action/Shipping"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quick_action_does_not_log() {
    let app = make_app();
    app.router
        .clone()
        .oneshot(get("/api/quick-action/shipping"))
        .await
        .unwrap();
    assert!(app.log.is_empty());
}

// =============================================================================
// GET /api/welcome, /api/intents, /api/analytics
// =============================================================================

#[tokio::test]
async fn test_welcome_message() {
    let app = make_app();
    let resp = app.router.clone().oneshot(get("/api/welcome")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "message": DEFAULT_WELCOME_MESSAGE })
    );
}

#[tokio::test]
async fn test_intents_listing_in_catalog_order() {
    let app = make_app();
    let resp = app.router.clone().oneshot(get("/api/intents")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 16);
    assert_eq!(list[0], json!({ "id": "shipping", "name": "Shipping Status" }));
    assert_eq!(list[15]["id"], "order_problem");
}

#[tokio::test]
async fn test_analytics_tracks_resolution() {
    let app = make_app();
    chat(&app, json!("where is my order")).await;
    chat(&app, json!("how do I pay with paypal")).await;
    chat(&app, json!("hello there")).await;

    let resp = app.router.clone().oneshot(get("/api/analytics")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "total_messages": 3,
            "resolved_messages": 2,
            "resolution_rate": "66.67%"
        })
    );
    assert_eq!(app.log.summary().total_messages, 3);
}

// =============================================================================
// GET / and /static
// =============================================================================

#[tokio::test]
async fn test_index_page_served() {
    let app = make_app();
    let resp = app.router.clone().oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(html.contains("faqbot test page"));
}

#[tokio::test]
async fn test_missing_index_page_is_500() {
    let mut config = Config::default();
    config.server.index_file = "missing.html".to_string();
    let app = make_app_with(config, Catalog::builtin());

    let resp = app.router.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("missing.html"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let app = make_app();
    let resp = app
        .router
        .clone()
        .oneshot(get("/static/script.js"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"console.log('hi');");

    let missing = app
        .router
        .clone()
        .oneshot(get("/static/nope.js"))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = make_app();
    let resp = app.router.clone().oneshot(get("/api/unknown")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_header_when_enabled() {
    let app = make_app();
    let req = Request::get("/api/welcome")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_no_cors_header_when_disabled() {
    let mut config = Config::default();
    config.server.enable_cors = false;
    let app = make_app_with(config, Catalog::builtin());
    let req = Request::get("/api/welcome")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let resp = app.router.clone().oneshot(req).await.unwrap();
    assert!(!resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
