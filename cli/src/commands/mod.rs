//! # faqbot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One module per top-level subcommand. Each exposes a clap `*Args` struct
//! and an async `handle_*` function called from `main.rs`.
//!

/// `faqbot ask`: match a single message from the terminal.
pub mod ask;
/// `faqbot intents`: list the intent catalog.
pub mod intents;
/// `faqbot serve`: run the HTTP chat API.
pub mod serve;
