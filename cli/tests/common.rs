//! # faqbot Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! that needs them declares `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get faqbot Command (`faqbot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `faqbot` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn faqbot_cmd() -> Command {
    Command::cargo_bin("faqbot").expect("Failed to find faqbot binary for testing")
}

/// # Isolated faqbot Command (`isolated_cmd`)
///
/// Like `faqbot_cmd`, but runs inside `dir` with user config lookups pointed
/// at `dir` and the `FAQBOT_*` variables cleared, so the developer's own
/// configuration cannot leak into a test.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = faqbot_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("FAQBOT_PORT")
        .env_remove("FAQBOT_HOST")
        .env_remove("FAQBOT_STATIC_DIR")
        .env_remove("FAQBOT_CATALOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A two-intent catalog file used by tests that exercise `--catalog`.
pub const SMALL_CATALOG: &str = r#"
[[intents]]
id = "hours"
name = "Business Hours"
keywords = ["hours", "open", "business hours"]
response = "We're open 9 to 6, Monday to Friday."

[[intents]]
id = "warranty"
name = "Warranty Information"
keywords = ["warranty", "broken", "repair"]
response = "Most products carry a one-year warranty."
"#;
