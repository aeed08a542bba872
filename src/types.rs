//! Common types used throughout placefinder
//!
//! Wire types for the place-search API responses plus the caller-facing
//! search parameters and page result types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Search Parameters
// ============================================================================

/// Caller-supplied parameters for a text search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text address to search near
    #[serde(default)]
    pub address: Option<String>,

    /// Free-text keywords (e.g., "coffee")
    #[serde(default)]
    pub keywords: Option<String>,

    /// Search radius in meters; falls back to the configured default
    #[serde(default)]
    pub radius: Option<u32>,
}

impl SearchParams {
    /// Create empty search parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the address
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the keywords
    #[must_use]
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    /// Set the radius in meters
    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// A single place record from a search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Display name of the place
    pub name: String,

    /// Opaque reference usable with the details endpoint
    #[serde(default)]
    pub reference: Option<String>,

    /// Stable place identifier
    #[serde(default)]
    pub place_id: Option<String>,

    /// Human-readable address
    #[serde(default)]
    pub formatted_address: Option<String>,

    /// Aggregate rating, if the API provides one
    #[serde(default)]
    pub rating: Option<f64>,

    /// Place type tags (e.g., "restaurant", "establishment")
    #[serde(default)]
    pub types: Vec<String>,
}

/// Decoded body of a text-search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// API status string; "OK" on success
    pub status: String,

    /// Place records for this page
    #[serde(default)]
    pub results: Vec<Place>,

    /// Cursor for the next page; absent on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,

    /// Attribution strings the API requires to be carried along
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

impl SearchResponse {
    /// Names of all places on this page, in response order
    pub fn place_names(&self) -> Vec<String> {
        self.results.iter().map(|p| p.name.clone()).collect()
    }
}

/// Decoded body of a place-details response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    /// API status string; "OK" on success
    pub status: String,

    /// Raw detail record; shape varies by place so it stays untyped
    #[serde(default)]
    pub result: serde_json::Value,

    /// Attribution strings
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

// ============================================================================
// Page Results
// ============================================================================

/// Result of a forward or backward page navigation
///
/// Running past the last page is not an error, so callers get a distinct
/// `End` value instead of an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// Place names on the fetched page
    Names(Vec<String>),
    /// No further page exists in this direction
    End,
}

impl Page {
    /// Check if this is the end-of-results signal
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Get the names, if any
    pub fn names(&self) -> Option<&[String]> {
        match self {
            Self::Names(names) => Some(names),
            Self::End => None,
        }
    }
}
