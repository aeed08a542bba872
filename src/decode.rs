//! Response body decoding
//!
//! Thin wrapper over serde_json that maps parse failures and missing
//! required fields into [`Error::Decode`] so callers can tell a bad body
//! apart from a transport failure.

use crate::error::{Error, Result};
use crate::types::{PlaceDetails, SearchResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a text-search response body
pub fn decode_search(body: &str) -> Result<SearchResponse> {
    decode(body)
}

/// Decode a place-details response body
pub fn decode_details(body: &str) -> Result<PlaceDetails> {
    decode(body)
}

/// Decode a body into any deserializable type
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })
}

/// Decode a body into an untyped JSON value
pub fn decode_raw(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })
}
