//! # faqbot
//!
//! A scripted FAQ chatbot. Messages are scored against a fixed catalog of
//! keyword-tagged intents and answered with the best intent's canned
//! response, or a fallback when nothing matches.
//!
//! - `intents`: catalog and matcher (pure, no I/O on the request path)
//! - `conversation`: the append-only turn log injected into the server
//! - `api`: Axum router and handlers
//! - `commands`: `serve`, `ask` and `intents` subcommands
//! - `core`: configuration and errors
//!
pub mod api;
pub mod commands;
pub mod conversation;
pub mod core;
pub mod intents;
