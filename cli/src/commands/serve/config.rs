//! # faqbot Serve Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Combines the layered file configuration (see `core::config`) with the
//! flags given to `faqbot serve`. Precedence, highest first:
//! 1. Command-line flags, or their `FAQBOT_*` environment variables
//! 2. Project `.faqbot.toml`
//! 3. User config file
//! 4. Defaults
//!
//! Flags are `Option`s so that "not given" is distinguishable from "given
//! with the default value".
//!
//! ## Examples
//!
//! ```bash
//! faqbot serve --port 8080 --static-dir ./public
//! FAQBOT_CATALOG=./intents.toml faqbot serve --no-cors
//! ```
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing::debug;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Defines the command-line arguments accepted by `faqbot serve`. Any flag
/// left out falls back to the configuration files, then to defaults.
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Port to listen on. Defaults to 5000; the next free port is used if it is taken.
    #[arg(long, short, env = "FAQBOT_PORT")]
    pub port: Option<u16>,

    /// Address to bind. Defaults to 0.0.0.0 (all interfaces).
    #[arg(long, env = "FAQBOT_HOST")]
    pub host: Option<IpAddr>,

    /// Directory containing the chat page and its assets.
    #[arg(long, env = "FAQBOT_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Intent catalog file (TOML). The built-in catalog is used when unset.
    #[arg(long, env = "FAQBOT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Load Serve Configuration (`load_serve_config`)
///
/// Loads the file configuration, overlays the command-line flags and
/// validates the result.
///
/// ## Errors
///
/// Returns an error if a configuration file cannot be read or parsed, or if
/// the merged settings fail validation (e.g. port 0).
pub fn load_serve_config(args: &ServeArgs) -> Result<Config> {
    let file_cfg = config::load_config().context("Failed to load faqbot configuration")?;
    resolve_serve_config(file_cfg, args)
}

/// Applies `args` over the file configuration, then validates. Validation
/// runs last so a flag can replace a bad value from a config file.
pub fn resolve_serve_config(mut cfg: Config, args: &ServeArgs) -> Result<Config> {
    apply_args(&mut cfg, args);
    config::validate_config(&cfg).context("Invalid serve settings")?;
    debug!("Effective serve config: {:?}", cfg);
    Ok(cfg)
}

/// Overlays the flags that were actually given onto `cfg`.
pub fn apply_args(cfg: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        cfg.server.port = port;
    }
    if let Some(host) = args.host {
        cfg.server.host = host;
    }
    if let Some(dir) = &args.static_dir {
        cfg.server.static_dir = dir.clone();
    }
    if let Some(catalog) = &args.catalog {
        cfg.catalog.path = Some(catalog.clone());
    }
    if args.no_cors {
        cfg.server.enable_cors = false;
    }
}
