//! # faqbot Serve Command
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqbot serve` runs the chat API and the chat page.
//!
//! The module is organized into two components:
//! - `config.rs`: command-line flags merged over the configuration files
//! - `server_logic.rs`: catalog loading, port selection and the Axum server
//!
//! ## Examples
//!
//! ```bash
//! # Serve with defaults (0.0.0.0:5000, ./static, built-in catalog)
//! faqbot serve
//!
//! # Custom port and catalog, local only
//! faqbot serve --port 8080 --host 127.0.0.1 --catalog ./intents.toml
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::ServeArgs;

/// Merges command-line flags with configuration files.
pub mod config;

/// Contains the Axum-based HTTP server.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Entry point for `faqbot serve`: resolves the effective configuration and
/// hands it to `server_logic::run_server`, which blocks until shutdown.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_serve_config(&args)?;
    server_logic::run_server(config).await?;

    Ok(())
}
