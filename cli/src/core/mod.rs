//! # faqbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: layered configuration loading, merging and validation
//! - `error`: domain error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{FaqbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
