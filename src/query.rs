//! Request URL construction
//!
//! URLs are built as pure functions of the config and parameters, so
//! identical inputs always produce byte-identical query strings. Free-text
//! segments go through the form-urlencoded serializer (space becomes `+`);
//! the API key and numeric fields are URL-safe and pass through unchanged.
//!
//! Parameter order is fixed: `key`, `sensor`, then exactly one of
//! `query`/`pagetoken`/`reference`, then (search only) `radius` and `types`.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::SearchParams;
use url::Url;

/// Build the initial text-search URL
pub fn search_url(config: &ClientConfig, params: &SearchParams) -> Result<Url> {
    let mut url = Url::parse(&config.search_endpoint)?;
    let radius = params.radius.unwrap_or(config.default_radius);

    url.query_pairs_mut()
        .append_pair("key", &config.api_key)
        .append_pair("sensor", "false")
        .append_pair("query", &query_text(config, params))
        .append_pair("radius", &radius.to_string())
        .append_pair("types", &config.place_type);

    Ok(url)
}

/// Build a next/previous page URL from a continuation token
///
/// The remote API requires the token to be the sole query qualifier; the
/// original search text, radius, and type filter must not be repeated.
pub fn page_url(config: &ClientConfig, token: &str) -> Result<Url> {
    let mut url = Url::parse(&config.search_endpoint)?;

    url.query_pairs_mut()
        .append_pair("key", &config.api_key)
        .append_pair("sensor", "false")
        .append_pair("pagetoken", token);

    Ok(url)
}

/// Build a place-details URL from an opaque place reference
pub fn details_url(config: &ClientConfig, reference: &str) -> Result<Url> {
    let mut url = Url::parse(&config.details_endpoint)?;

    url.query_pairs_mut()
        .append_pair("key", &config.api_key)
        .append_pair("sensor", "false")
        .append_pair("reference", reference);

    Ok(url)
}

/// Assemble the free-text query: keywords plus the establishment fragment,
/// then a "near <address>" clause when an address is present
fn query_text(config: &ClientConfig, params: &SearchParams) -> String {
    let mut text = match &params.keywords {
        Some(keywords) if !keywords.is_empty() => {
            format!("{}{}", keywords, config.establishment)
        }
        _ => config.establishment.trim_start().to_string(),
    };

    if let Some(address) = &params.address {
        if !address.is_empty() {
            text.push_str(" near ");
            text.push_str(address);
        }
    }

    text
}
