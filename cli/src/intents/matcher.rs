//! # Intent Matcher
//!
//! File: cli/src/intents/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pure functions that map a user message onto the catalog. No state, no I/O,
//! safe to call from any number of requests at once.
//!
//! ## Scoring
//!
//! The message is lowercased and nothing else: no trimming, tokenizing or
//! stemming. An intent's score is the summed character length of every
//! keyword that occurs as a substring of the lowercased message, so a keyword
//! still counts when it is embedded in a longer word ("ship" in "shipment").
//! Longer, more specific phrases therefore outweigh short generic ones.
//!
//! The highest score wins. Replacement requires a strictly greater score, so
//! ties go to the intent listed first. A best score of zero means no match.
//!
use super::catalog::Intent;

/// Score for one intent against an already-lowercased message.
///
/// Overlapping keywords are counted independently: "forgot password" scores
/// both "password" and "forgot password".
///
/// Only the containment test uses the lowercased keyword. The length added is
/// that of the keyword as written, which can differ when lowercasing changes
/// the character count (`"İ"` lowercases to two chars).
pub fn score_intent(message_lower: &str, intent: &Intent) -> usize {
    intent
        .keywords
        .iter()
        .filter(|keyword| message_lower.contains(keyword.to_lowercase().as_str()))
        .map(|keyword| keyword.chars().count())
        .sum()
}

/// Returns the best-scoring intent for `message`, or `None` when nothing scores.
pub fn match_intent<'a>(message: &str, intents: &'a [Intent]) -> Option<&'a Intent> {
    let message_lower = message.to_lowercase();
    let mut best: Option<&Intent> = None;
    let mut highest_score = 0;

    for intent in intents {
        let score = score_intent(&message_lower, intent);
        if score > highest_score {
            highest_score = score;
            best = Some(intent);
        }
    }

    best
}

/// Exact, case-sensitive lookup by id. First match in catalog order.
pub fn find_by_id<'a>(id: &str, intents: &'a [Intent]) -> Option<&'a Intent> {
    intents.iter().find(|intent| intent.id == id)
}

/// Per-intent scores in catalog order, for explaining a match.
pub fn score_all<'a>(message: &str, intents: &'a [Intent]) -> Vec<(&'a Intent, usize)> {
    let message_lower = message.to_lowercase();
    intents
        .iter()
        .map(|intent| (intent, score_intent(&message_lower, intent)))
        .collect()
}
