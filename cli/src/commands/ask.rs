//! # faqbot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `faqbot ask` runs one message through the matcher from the terminal, the
//! same way `POST /api/chat` would, without starting a server. Useful when
//! editing a catalog file to see which intent a phrase lands on.
//!
//! ```bash
//! faqbot ask "where is my order?"
//! faqbot ask --explain "can I get a wholesale discount"
//! faqbot ask --json "forgot password"
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use crate::intents::{matcher, Catalog};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to match. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Intent catalog file (TOML). Overrides the configured catalog.
    #[arg(long, env = "FAQBOT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Also print the score of every intent that matched at least one keyword.
    #[arg(long)]
    pub explain: bool,

    /// Print the chat API's JSON response instead of plain text.
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,
}

/// Same shape as the body returned by `POST /api/chat`.
#[derive(Debug, Serialize)]
struct AskOutput<'a> {
    response: &'a str,
    intent_id: Option<&'a str>,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Loads configuration and catalog, matches the message and prints the
/// result. An empty message is an error, as it is for the chat endpoint.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    // Join the words back into one message, then reject blank input early.
    let message = args.message.join(" ");
    let message = message.trim();
    if message.is_empty() {
        anyhow::bail!("Message cannot be empty");
    }

    // Server settings are irrelevant here; only the fallback text is used.
    let cfg = config::load_config().context("Failed to load faqbot configuration")?;
    config::validate_messages(&cfg.messages).context("Invalid message settings")?;
    // `--catalog` (or FAQBOT_CATALOG) beats the configured catalog path.
    let catalog_path = args.catalog.or(cfg.catalog.path);
    let catalog = Catalog::load_or_builtin(catalog_path.as_deref())
        .context("Failed to load intent catalog")?;

    let matched = catalog.match_message(message);
    info!(
        intent_id = matched.map(|i| i.id.as_str()).unwrap_or("none"),
        "Matched message from command line"
    );

    let output = AskOutput {
        response: matched
            .map(|intent| intent.response.as_str())
            .unwrap_or(cfg.messages.fallback.as_str()),
        intent_id: matched.map(|intent| intent.id.as_str()),
    };

    // Output: JSON, optional score table, then the reply.
    if args.json {
        let json = serde_json::to_string_pretty(&output).context("Failed to encode response")?;
        println!("{json}");
        return Ok(());
    }

    if args.explain {
        println!("Scores:");
        for line in explain_lines(message, &catalog) {
            println!("  {line}");
        }
        println!();
    }

    match output.intent_id {
        Some(id) => println!("Intent: {id}"),
        None => println!("Intent: (none)"),
    }
    println!();
    println!("{}", output.response);
    Ok(())
}

/// One line per intent with a non-zero score, highest first. Equal scores
/// keep catalog order, matching the matcher's tie-break.
fn explain_lines(message: &str, catalog: &Catalog) -> Vec<String> {
    let mut scored: Vec<_> = matcher::score_all(message, catalog.intents())
        .into_iter()
        .filter(|(_, score)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    if scored.is_empty() {
        return vec!["(no keyword matched)".to_string()];
    }
    scored
        .into_iter()
        .map(|(intent, score)| format!("{:<20} {:>3}", intent.id, score))
        .collect()
}
