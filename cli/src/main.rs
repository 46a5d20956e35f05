//! # faqbot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Parses the command line, sets up logging based on verbosity flags and
//! routes to the subcommand handlers in `faqbot::commands`.
//!
//! ```bash
//! # Run the chat server with request logging
//! faqbot -v serve
//!
//! # Try a message against the catalog
//! faqbot ask "where is my order?"
//! ```
//!
use clap::Parser;
use faqbot::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "faqbot",
    about = "🤖 faqbot: keyword-matched FAQ answers over HTTP",
    long_about = "Answers customer questions by matching them against a catalog of\n\
                  keyword-tagged intents. Run the HTTP chat API with `serve`, or try\n\
                  messages from the terminal with `ask`.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Run the HTTP chat API and chat page.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Match one message against the catalog and print the reply.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the intents in the catalog.
    #[command(alias = "i")]
    Intents(commands::intents::IntentsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Map -v flags to a default filter; RUST_LOG, when set, takes precedence.
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    // Dispatch to the subcommand handler.
    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Intents(args) => commands::intents::handle_intents(args).await,
    };

    // Print the full context chain and exit non-zero on failure.
    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
