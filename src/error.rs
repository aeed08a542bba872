//! Error types for placefinder
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The no-further-page condition is not an error; see [`crate::types::Page`].

use thiserror::Error;

/// The main error type for placefinder
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("API returned status '{status}'")]
    ApiStatus { status: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("No page token available for the requested page")]
    MissingPageToken,

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an API status error
    pub fn api_status(status: impl Into<String>) -> Self {
        Self::ApiStatus {
            status: status.into(),
        }
    }

    /// Check if this error came from the remote API rather than the transport
    pub fn is_api_status(&self) -> bool {
        matches!(self, Error::ApiStatus { .. })
    }
}

/// Result type alias for placefinder
pub type Result<T> = std::result::Result<T, Error>;
