//! CLI module
//!
//! Command-line interface for the place-search client.
//!
//! # Commands
//!
//! - `search` - Run a text search and optionally walk forward through pages
//! - `details` - Fetch the detail record for a place reference

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
