//! # faqbot HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs the chat API for `faqbot serve`:
//! - Loads the intent catalog once, before binding
//! - Creates the process-lifetime conversation log
//! - Finds an available port, falling back to the next ones if needed
//! - Serves until Ctrl+C or SIGTERM, then shuts down gracefully
//!
//! ## Examples
//!
//! ```rust,ignore
//! let config = config::load_serve_config(&args)?;
//! server_logic::run_server(config).await?;
//! ```
//!
use crate::api::{self, AppState};
use crate::conversation::InMemoryLog;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::intents::Catalog;
use anyhow::Context;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// How many consecutive ports to try before giving up.
const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Builds the application state from `config` and serves the API until a
/// shutdown signal arrives.
///
/// ## Process:
/// 1. Loads the catalog (configured file or built-in).
/// 2. Binds the first available port at or after the configured one.
/// 3. Builds the router with a fresh `InMemoryLog`.
/// 4. Prints the URLs and serves with graceful shutdown.
///
/// ## Errors
///
/// Returns an error if the catalog cannot be loaded, no port is available,
/// or the server itself fails.
pub async fn run_server(config: Config) -> Result<()> {
    // 1. Load the catalog before binding, so a bad catalog file never opens a port.
    let catalog = Catalog::load_or_builtin(config.catalog.path.as_deref())
        .context("Failed to load intent catalog")?;
    let intent_count = catalog.len();

    // 2. Keep the listener from the port scan so nothing can take the port
    // between finding it and serving on it.
    let listener =
        bind_available_port(config.server.host, config.server.port, MAX_PORT_ATTEMPTS).await?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound listener address")?;

    // 3. Fresh log per process; turns are not persisted across restarts.
    let log = Arc::new(InMemoryLog::new());
    let state = AppState::new(&config, catalog, log);
    if !state.index_page.is_file() {
        warn!(
            "Index page {} not found; GET / will return 500.",
            state.index_page.display()
        );
    }
    let app = api::create_router(state);

    // 4. Startup banner on stdout, separate from the tracing output on stderr.
    println!("\n=================================================================");
    println!("🤖 faqbot listening on:  http://localhost:{}", addr.port());
    println!("⚙️  Bound to address:     {}", addr);
    println!("📚 Intents loaded:       {}", intent_count);
    println!(
        "📂 Static directory:     {}",
        config.server.static_dir.display()
    );
    println!("🔒 CORS enabled:         {}", config.server.enable_cors);
    println!("=================================================================\n");

    info!("Starting faqbot on {} with {} intents", addr, intent_count);
    println!("Server starting! Press Ctrl+C to stop.");

    // Blocks until `shutdown_signal` resolves and in-flight requests finish.
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received.
async fn shutdown_signal() {
    // Future for Ctrl+C. If the handler cannot be installed, wait forever so
    // the select below falls through to the other signal.
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    // SIGTERM is what container runtimes and service managers send.
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    // Whichever signal arrives first wins.
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Bind Available Port (`bind_available_port`)
///
/// Tries `start_port` and then each following port, up to `max_attempts`
/// ports in total, and returns the listener for the first one that binds.
///
/// ## Errors
///
/// Returns an error when every attempted port is unavailable.
async fn bind_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<TcpListener> {
    let mut current_port = start_port;

    // Try each port in turn and hand back the first listener that binds.
    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                // Only mention the fallback when the configured port was busy.
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                // Stop at 65535 rather than wrapping around to port 0.
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        host,
        start_port,
        max_attempts
    )
}
