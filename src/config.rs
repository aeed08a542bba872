//! Client configuration
//!
//! Configuration is read once at construction and is immutable afterwards.
//! The endpoint fields default to the production API but can be overridden,
//! which is how tests point the client at a mock server.

use std::time::Duration;

/// Production text-search endpoint
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

/// Production place-details endpoint
pub const DEFAULT_DETAILS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Default search radius in meters
pub const DEFAULT_RADIUS: u32 = 5000;

/// Configuration for a [`crate::client::PlaceSearchClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key, inserted verbatim into every request URL
    pub api_key: String,
    /// Text-search endpoint
    pub search_endpoint: String,
    /// Place-details endpoint
    pub details_endpoint: String,
    /// Default search radius in meters
    pub default_radius: u32,
    /// Place-type filter for the `types` parameter
    pub place_type: String,
    /// Fixed text fragment appended to keyword searches
    pub establishment: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            details_endpoint: DEFAULT_DETAILS_ENDPOINT.to_string(),
            default_radius: DEFAULT_RADIUS,
            place_type: "establishment".to_string(),
            establishment: " establishment".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("placefinder/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a config with the given API key and defaults for everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the text-search endpoint
    pub fn search_endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.search_endpoint = url.into();
        self
    }

    /// Set the place-details endpoint
    pub fn details_endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.details_endpoint = url.into();
        self
    }

    /// Set the default search radius in meters
    pub fn default_radius(mut self, radius: u32) -> Self {
        self.config.default_radius = radius;
        self
    }

    /// Set the place-type filter
    pub fn place_type(mut self, place_type: impl Into<String>) -> Self {
        self.config.place_type = place_type.into();
        self
    }

    /// Set the establishment fragment appended to keyword searches
    pub fn establishment(mut self, fragment: impl Into<String>) -> Self {
        self.config.establishment = fragment.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
