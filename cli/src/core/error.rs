//! # faqbot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the domain error types used throughout faqbot.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `FaqbotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Configuration errors
//! - Intent catalog errors (parse failures, duplicate or empty ids)
//! - Static page errors
//!
//! HTTP-facing errors live in `api::error::ApiError`, which maps request
//! failures onto status codes. Matching never fails, so nothing here is
//! raised on the request path except `StaticPage`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if seen.contains(&intent.id) {
//!     return Err(FaqbotError::DuplicateIntent { id: intent.id.clone() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for faqbot.
#[derive(Error, Debug)]
pub enum FaqbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Intent id '{id}' appears more than once in the catalog.")]
    DuplicateIntent { id: String },

    #[error("Intent at position {index} has an empty id.")]
    EmptyIntentId { index: usize },

    #[error("Failed to parse catalog TOML: {source}")]
    CatalogParse {
        #[from]
        source: toml::de::Error,
    },

    #[error("Static page '{path}' could not be read: {reason}")]
    StaticPage { path: String, reason: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = FaqbotError::Config("port must be non-zero".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: port must be non-zero"
        );

        let duplicate = FaqbotError::DuplicateIntent {
            id: "shipping".into(),
        };
        assert_eq!(
            duplicate.to_string(),
            "Intent id 'shipping' appears more than once in the catalog."
        );

        let empty = FaqbotError::EmptyIntentId { index: 3 };
        assert_eq!(empty.to_string(), "Intent at position 3 has an empty id.");
    }

    #[test]
    fn test_toml_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let err: FaqbotError = parse_err.into();
        assert!(err.to_string().starts_with("Failed to parse catalog TOML"));
    }
}
