//! # faqbot Intents Command
//!
//! File: cli/src/commands/intents.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqbot intents` prints the catalog in order: id, display name and
//! keyword count. Useful for checking which ids the quick-action endpoint
//! will accept.
//!
use crate::core::config;
use crate::core::error::Result;
use crate::intents::Catalog;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// # Intents Command Arguments (`IntentsArgs`)
#[derive(Parser, Debug)]
pub struct IntentsArgs {
    /// Intent catalog file (TOML). Overrides the configured catalog.
    #[arg(long, env = "FAQBOT_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// # Handle Intents Command (`handle_intents`)
pub async fn handle_intents(args: IntentsArgs) -> Result<()> {
    let cfg = config::load_config().context("Failed to load faqbot configuration")?;
    let catalog_path = args.catalog.or(cfg.catalog.path);
    let catalog = Catalog::load_or_builtin(catalog_path.as_deref())
        .context("Failed to load intent catalog")?;

    print_intent_table(&catalog);
    Ok(())
}

fn print_intent_table(catalog: &Catalog) {
    let id_width = catalog
        .intents()
        .iter()
        .map(|intent| intent.id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    println!("{:<id_width$}  {:<24}  KEYWORDS", "ID", "NAME");
    for intent in catalog.intents() {
        println!(
            "{:<id_width$}  {:<24}  {}",
            intent.id,
            intent.name,
            intent.keywords.len()
        );
    }
    println!("\n{} intents", catalog.len());
}
