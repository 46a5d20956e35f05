//! # faqbot HTTP API
//!
//! File: cli/src/api/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The JSON API and page routes served by `faqbot serve`:
//!
//! | Method | Path                            | Handler                  |
//! |--------|---------------------------------|--------------------------|
//! | GET    | `/`                             | `handlers::index`        |
//! | POST   | `/api/chat`                     | `handlers::chat`         |
//! | GET    | `/api/quick-action/{intent_id}` | `handlers::quick_action` |
//! | GET    | `/api/welcome`                  | `handlers::welcome`      |
//! | GET    | `/api/intents`                  | `handlers::list_intents` |
//! | GET    | `/api/analytics`                | `handlers::analytics`    |
//! | GET    | `/static/*`                     | `ServeDir`               |
//!
//! Handlers are thin: they call into the catalog and the injected
//! conversation log and translate the result to JSON.
//!
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

/// Builds the application router with tracing and CORS middleware.
pub fn create_router(state: AppState) -> Router {
    let cors_layer = if state.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/chat", post(handlers::chat))
        .route(
            "/api/quick-action/{intent_id}",
            get(handlers::quick_action),
        )
        .route("/api/welcome", get(handlers::welcome))
        .route("/api/intents", get(handlers::list_intents))
        .route("/api/analytics", get(handlers::analytics))
        .nest_service("/static", static_files)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(cors_layer),
        )
        .with_state(state)
}
