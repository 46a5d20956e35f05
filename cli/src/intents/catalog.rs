//! # Intent Catalog
//!
//! File: cli/src/intents/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The catalog is the ordered, read-only list of intents the bot knows about.
//! It is built once at startup, either from the built-in table or from a TOML
//! file, and then shared behind an `Arc` by every request.
//!
//! A catalog file is a list of `[[intents]]` tables:
//!
//! ```toml
//! [[intents]]
//! id = "hours"
//! name = "Business Hours"
//! keywords = ["hours", "open", "business hours"]
//! response = "We're open 9-6, Monday to Friday."
//! ```
//!
//! Loading rejects empty and duplicate ids. Keywords are kept as written; the
//! matcher lowercases them when testing containment.
//!
use super::{builtin, matcher};
use crate::core::error::{FaqbotError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Greeting returned by `GET /api/welcome` unless overridden in config.
pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello! 👋 I'm here to help with your questions. How can I assist you today?";

/// Reply used when no intent scores above zero, unless overridden in config.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "I'm not sure I understand. Could you rephrase that or try one of the quick action buttons below?";

/// A named category of user request with its canned response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub id: String,
    pub name: String,
    /// Phrases matched case-insensitively; each one found in a message adds
    /// its length to the score.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub response: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    intents: Vec<Intent>,
}

/// Ordered, immutable collection of intents.
#[derive(Debug, Clone)]
pub struct Catalog {
    intents: Vec<Intent>,
}

impl Catalog {
    /// The intents faqbot ships with.
    pub fn builtin() -> Self {
        Self {
            intents: builtin::intents(),
        }
    }

    /// Validates `intents` and wraps them in a catalog, preserving order.
    pub fn from_intents(intents: Vec<Intent>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(intents.len());
        let mut validated = Vec::with_capacity(intents.len());

        for (index, intent) in intents.into_iter().enumerate() {
            if intent.id.trim().is_empty() {
                return Err(FaqbotError::EmptyIntentId { index }.into());
            }
            if !seen.insert(intent.id.clone()) {
                return Err(FaqbotError::DuplicateIntent { id: intent.id }.into());
            }
            if intent.keywords.is_empty() {
                warn!(
                    "Intent '{}' has no keywords; it can only be reached by quick action.",
                    intent.id
                );
            }
            validated.push(intent);
        }

        Ok(Self {
            intents: validated,
        })
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: CatalogDocument = toml::from_str(content).map_err(FaqbotError::from)?;
        if document.intents.is_empty() {
            return Err(FaqbotError::Catalog("catalog defines no intents".to_string()).into());
        }
        Self::from_intents(document.intents)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading intent catalog from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))?;
        debug!("Loaded {} intents", catalog.len());
        Ok(catalog)
    }

    /// Loads `path` if given, otherwise returns the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using built-in intent catalog");
                Ok(Self::builtin())
            }
        }
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Best-scoring intent for `message`; see [`matcher::match_intent`].
    pub fn match_message(&self, message: &str) -> Option<&Intent> {
        matcher::match_intent(message, &self.intents)
    }

    /// Exact, case-sensitive id lookup; see [`matcher::find_by_id`].
    pub fn find_by_id(&self, id: &str) -> Option<&Intent> {
        matcher::find_by_id(id, &self.intents)
    }
}
