//! # faqbot Intents
//!
//! File: cli/src/intents/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything about recognising what a user is asking for:
//! - `catalog`: the `Intent` record and the ordered, immutable `Catalog`
//! - `matcher`: keyword scoring, best-match selection and id lookup
//! - `builtin`: the intents shipped with the binary
//!
//! ```rust,ignore
//! let catalog = Catalog::builtin();
//! match catalog.match_message("where is my order?") {
//!     Some(intent) => println!("{}", intent.response),
//!     None => println!("{}", DEFAULT_FALLBACK_MESSAGE),
//! }
//! ```
//!
mod builtin;
pub mod catalog;
pub mod matcher;

pub use catalog::{Catalog, Intent, DEFAULT_FALLBACK_MESSAGE, DEFAULT_WELCOME_MESSAGE};
