//! # Conversation Log
//!
//! File: cli/src/conversation.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Every chat request produces one `ConversationTurn`, handed to a
//! `ConversationLog` owned by the HTTP application state. The matcher never
//! reads the log back; it is a sink for the turns plus a source for the
//! analytics endpoint.
//!
//! Turns live only as long as the process. `InMemoryLog` serializes appends
//! through a mutex so concurrent requests cannot interleave a push.
//!
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// One user message and the reply it received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    pub bot_response: String,
    pub matched_intent_id: Option<String>,
}

impl ConversationTurn {
    /// Creates a turn stamped with the current time.
    pub fn new(
        user_message: impl Into<String>,
        bot_response: impl Into<String>,
        matched_intent_id: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_message: user_message.into(),
            bot_response: bot_response.into(),
            matched_intent_id,
        }
    }

    /// A turn is resolved when some intent matched.
    pub fn is_resolved(&self) -> bool {
        self.matched_intent_id.is_some()
    }
}

/// Aggregate counts over the logged turns, as served by `GET /api/analytics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    pub total_messages: usize,
    pub resolved_messages: usize,
    /// Percentage with two decimals, e.g. `"66.67%"`.
    pub resolution_rate: String,
}

impl ConversationSummary {
    pub fn from_turns(turns: &[ConversationTurn]) -> Self {
        let total_messages = turns.len();
        let resolved_messages = turns.iter().filter(|turn| turn.is_resolved()).count();
        let rate = if total_messages > 0 {
            resolved_messages as f64 / total_messages as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_messages,
            resolved_messages,
            resolution_rate: format!("{rate:.2}%"),
        }
    }
}

/// Append-only sink for conversation turns.
pub trait ConversationLog: Send + Sync {
    fn append(&self, turn: ConversationTurn);

    fn summary(&self) -> ConversationSummary;
}

/// Process-lifetime log backed by a mutex-guarded `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryLog {
    turns: Mutex<Vec<ConversationTurn>>,
}

impl InMemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of all turns recorded so far, oldest first.
    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-pushed turn behind,
    // so a poisoned guard is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<ConversationTurn>> {
        self.turns
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ConversationLog for InMemoryLog {
    fn append(&self, turn: ConversationTurn) {
        debug!(
            intent_id = turn.matched_intent_id.as_deref().unwrap_or("none"),
            "Recording conversation turn"
        );
        self.lock().push(turn);
    }

    fn summary(&self) -> ConversationSummary {
        ConversationSummary::from_turns(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn appends_in_order() {
        let log = InMemoryLog::new();
        assert!(log.is_empty());

        log.append(ConversationTurn::new("first", "a", Some("shipping".into())));
        log.append(ConversationTurn::new("second", "b", None));

        let turns = log.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].user_message, "first");
        assert_eq!(turns[0].matched_intent_id.as_deref(), Some("shipping"));
        assert_eq!(turns[1].user_message, "second");
        assert!(turns[0].timestamp <= turns[1].timestamp);
    }

    #[test]
    fn summary_of_empty_log() {
        let summary = InMemoryLog::new().summary();
        assert_eq!(summary.total_messages, 0);
        assert_eq!(summary.resolved_messages, 0);
        assert_eq!(summary.resolution_rate, "0.00%");
    }

    #[test]
    fn summary_counts_resolved_turns() {
        let log = InMemoryLog::new();
        log.append(ConversationTurn::new("a", "x", Some("return".into())));
        log.append(ConversationTurn::new("b", "y", Some("pricing".into())));
        log.append(ConversationTurn::new("c", "z", None));

        let summary = log.summary();
        assert_eq!(summary.total_messages, 3);
        assert_eq!(summary.resolved_messages, 2);
        assert_eq!(summary.resolution_rate, "66.67%");
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let log = Arc::new(InMemoryLog::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let log = Arc::clone(&log);
                std::thread::spawn(move || {
                    for n in 0..50 {
                        log.append(ConversationTurn::new(format!("{worker}-{n}"), "r", None));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 400);
    }

    #[test]
    fn usable_as_trait_object() {
        let log: Arc<dyn ConversationLog> = Arc::new(InMemoryLog::new());
        log.append(ConversationTurn::new("hi", "hello", None));
        assert_eq!(log.summary().total_messages, 1);
    }
}
