//! Application state shared by every request handler.
//!
//! The catalog and message texts are read-only after startup. The conversation
//! log is the only thing written to, and it is injected here rather than held
//! in a global so handlers can be tested against any `ConversationLog`.

use crate::conversation::ConversationLog;
use crate::core::config::{Config, MessageSettings};
use crate::intents::Catalog;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub log: Arc<dyn ConversationLog>,
    pub messages: Arc<MessageSettings>,
    /// HTML page served at `/`.
    pub index_page: PathBuf,
    /// Directory mounted at `/static`.
    pub static_dir: PathBuf,
    pub enable_cors: bool,
}

impl AppState {
    /// Builds the state for a server running with `config`.
    pub fn new(config: &Config, catalog: Catalog, log: Arc<dyn ConversationLog>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            log,
            messages: Arc::new(config.messages.clone()),
            index_page: config.server.static_dir.join(&config.server.index_file),
            static_dir: config.server.static_dir.clone(),
            enable_cors: config.server.enable_cors,
        }
    }
}
