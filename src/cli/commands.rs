//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Place-search client CLI
#[derive(Parser, Debug)]
#[command(name = "placefinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key (falls back to the PLACES_API_KEY environment variable)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a text search and print place names
    Search {
        /// Address to search near
        #[arg(short, long)]
        address: Option<String>,

        /// Search keywords (e.g., "coffee")
        #[arg(short = 'q', long)]
        keywords: Option<String>,

        /// Search radius in meters
        #[arg(short, long)]
        radius: Option<u32>,

        /// Place-type filter
        #[arg(long)]
        place_type: Option<String>,

        /// Additional pages to fetch after the first
        #[arg(short, long, default_value = "0")]
        pages: u32,
    },

    /// Fetch the detail record for a place reference
    Details {
        /// Opaque place reference from a search result
        reference: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw response JSON
    Json,
    /// Human-readable output
    Pretty,
}
