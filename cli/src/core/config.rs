//! # faqbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates faqbot configuration. Settings are
//! layered so that a project file can override a user file, which in turn
//! overrides built-in defaults. Command-line flags are applied on top of the
//! result by each command (see `commands::serve::config`).
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.faqbot.toml` in current directory or ancestors
//! 2. User-specific `<config dir>/faqbot/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! static_dir = "~/faqbot/static"
//!
//! [catalog]
//! path = "~/faqbot/intents.toml"
//!
//! [messages]
//! fallback = "Sorry, I didn't catch that."
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config()?;
//! println!("Listening on {}:{}", cfg.server.host, cfg.server.port);
//! ```
//!
use crate::core::error::{FaqbotError, Result};
use crate::intents::catalog::{DEFAULT_FALLBACK_MESSAGE, DEFAULT_WELCOME_MESSAGE};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".faqbot.toml";

/// Effective configuration after all layers have been merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub messages: MessageSettings,
}

/// Network and static-file settings for `faqbot serve`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the index page and any assets served under `/static`.
    pub static_dir: PathBuf,
    pub index_file: String,
    pub enable_cors: bool,
}

/// Where intents come from. `None` means the built-in catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSettings {
    pub path: Option<PathBuf>,
}

/// Fixed bot texts.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageSettings {
    pub welcome: String,
    pub fallback: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            static_dir: PathBuf::from("static"),
            index_file: "index.html".to_string(),
            enable_cors: true,
        }
    }
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME_MESSAGE.to_string(),
            fallback: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// One configuration file as written on disk. Every field is optional so a
/// file only needs to mention what it overrides.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerFile,
    #[serde(default)]
    pub catalog: CatalogFile,
    #[serde(default)]
    pub messages: MessagesFile,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerFile {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub index_file: Option<String>,
    pub enable_cors: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub path: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct MessagesFile {
    pub welcome: Option<String>,
    pub fallback: Option<String>,
}

impl Config {
    /// Overlays the values present in `file` onto `self`. Paths are `~`-expanded
    /// here, and relative ones are anchored at `base_dir` (the directory of the
    /// file they came from) when one is given.
    pub fn apply(&mut self, file: ConfigFile, base_dir: Option<&Path>) {
        let ConfigFile {
            server,
            catalog,
            messages,
        } = file;

        if let Some(host) = server.host {
            self.server.host = host;
        }
        if let Some(port) = server.port {
            self.server.port = port;
        }
        if let Some(dir) = server.static_dir {
            self.server.static_dir = resolve_path(&dir, base_dir);
        }
        if let Some(index) = server.index_file {
            self.server.index_file = index;
        }
        if let Some(cors) = server.enable_cors {
            self.server.enable_cors = cors;
        }
        if let Some(path) = catalog.path {
            self.catalog.path = Some(resolve_path(&path, base_dir));
        }
        if let Some(welcome) = messages.welcome {
            self.messages.welcome = welcome;
        }
        if let Some(fallback) = messages.fallback {
            self.messages.fallback = fallback;
        }
    }
}

/// Loads the user and project configuration files and merges them over the
/// defaults.
///
/// The result is not validated here. Each command applies its own flags
/// first and then checks only the settings it uses (`validate_config` for
/// `serve`, `validate_messages` for `ask`).
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    // Start from the built-in defaults.
    let mut config = Config::default();

    // Layer the user config on top, then the project config on top of that.
    if let Some((user, user_dir)) = load_user_config()? {
        config.apply(user, Some(&user_dir));
    }
    if let Some(project_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_path.display()
        );
        let file = load_config_from_path(&project_path)?;
        config.apply(file, project_path.parent());
    } else {
        debug!("No project configuration file (.faqbot.toml) found in current directory or ancestors.");
    }

    debug!("Merged file configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<(ConfigFile, PathBuf)>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "faqbot", "faqbot") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        let file = load_config_from_path(&config_path)?;
        Ok(Some((file, proj_dirs.config_dir().to_path_buf())))
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.faqbot.toml`.
/// The search stops at the first directory containing `.git`.
pub fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        // Check the current directory first.
        let candidate = path.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        // A repository root bounds the search.
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        // Move up; `None` at the filesystem root ends the search.
        path = path.parent()?;
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn resolve_path(raw: &str, base_dir: Option<&Path>) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    match base_dir {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

/// Checks every setting `faqbot serve` depends on.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_server(&config.server)?;
    validate_messages(&config.messages)
}

/// Checks the listener and static-file settings.
pub fn validate_server(server: &ServerSettings) -> Result<()> {
    if server.port == 0 {
        return Err(anyhow!(FaqbotError::Config(
            "server.port must be between 1 and 65535.".to_string()
        )));
    }
    if server.index_file.trim().is_empty() {
        return Err(anyhow!(FaqbotError::Config(
            "server.index_file cannot be empty.".to_string()
        )));
    }
    let static_dir = &server.static_dir;
    if !static_dir.exists() {
        warn!(
            "Configured static directory '{}' does not exist.",
            static_dir.display()
        );
    } else if !static_dir.is_dir() {
        return Err(anyhow!(FaqbotError::Config(format!(
            "Configured static path '{}' exists but is not a directory.",
            static_dir.display()
        ))));
    }
    Ok(())
}

/// Checks the bot texts. Used on its own by commands that never bind a port.
pub fn validate_messages(messages: &MessageSettings) -> Result<()> {
    if messages.welcome.trim().is_empty() {
        return Err(anyhow!(FaqbotError::Config(
            "messages.welcome cannot be empty.".to_string()
        )));
    }
    if messages.fallback.trim().is_empty() {
        return Err(anyhow!(FaqbotError::Config(
            "messages.fallback cannot be empty.".to_string()
        )));
    }
    Ok(())
}
