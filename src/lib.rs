//! # placefinder
//!
//! A client for cursor-paginated place-search APIs (Google Places
//! text-search shape). Builds query URLs, issues HTTP GET requests, and
//! walks next-page tokens forward and backward through result pages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use placefinder::{ClientConfig, Page, PlaceSearchClient, Result, SearchParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new("your-api-key");
//!     let params = SearchParams::new().address("Portland, OR").keywords("coffee");
//!
//!     let mut client = PlaceSearchClient::with_params(config, params)?;
//!     let names = client.search().await?;
//!
//!     while let Page::Names(more) = client.next_page().await? {
//!         // Process the next page
//!     }
//!
//!     // Walk back to where you started without re-issuing the query
//!     let back = client.previous_page().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   PlaceSearchClient                     │
//! │  search() → names    next_page()/previous_page() → Page │
//! │  details(reference) → PlaceDetails                      │
//! └─────────────────────────────────────────────────────────┘
//!              │                │               │
//! ┌────────────┴──┬─────────────┴───┬───────────┴──────────┐
//! │    Query      │      HTTP       │      Pagination      │
//! ├───────────────┼─────────────────┼──────────────────────┤
//! │ search_url    │ GET             │ TokenStack           │
//! │ page_url      │ status mapping  │ SearchSession        │
//! │ details_url   │ JSON decode     │ rewind / exhausted   │
//! └───────────────┴─────────────────┴──────────────────────┘
//! ```
//!
//! One client instance owns one logical search session; all mutating calls
//! take `&mut self`, so requests are strictly sequential per instance.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and wire formats
pub mod types;

/// Client configuration
pub mod config;

/// Request URL construction
pub mod query;

/// Response body decoding
pub mod decode;

/// HTTP fetch layer
pub mod http;

/// Pagination bookkeeping
pub mod pagination;

/// The place-search client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::PlaceSearchClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::{Page, Place, PlaceDetails, SearchParams, SearchResponse};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
