//! The place-search client
//!
//! Ties the URL builders, the HTTP fetcher, the JSON decoder, and the
//! pagination session together. Every state-mutating operation takes
//! `&mut self`, so one client instance can never have two requests in
//! flight; use one instance per logical search session.

use crate::config::ClientConfig;
use crate::decode;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::{Rewind, SearchSession};
use crate::query;
use crate::types::{Page, PlaceDetails, SearchParams, SearchResponse};
use tracing::debug;
use url::Url;

/// API status string signalling success
const STATUS_OK: &str = "OK";

/// Client for a cursor-paginated place-search API
pub struct PlaceSearchClient {
    config: ClientConfig,
    http: HttpClient,
    params: SearchParams,
    session: SearchSession,
    last_url: Option<Url>,
}

impl PlaceSearchClient {
    /// Create a client with empty search parameters
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_params(config, SearchParams::new())
    }

    /// Create a client with the given search parameters
    pub fn with_params(config: ClientConfig, params: SearchParams) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::missing_field("api_key"));
        }

        let http = HttpClient::from_config(&config);

        Ok(Self {
            config,
            http,
            params,
            session: SearchSession::new(),
            last_url: None,
        })
    }

    /// Run the initial search and return the first page of place names
    ///
    /// Always starts a fresh session: any pagination state from a previous
    /// search is discarded before the request goes out.
    pub async fn search(&mut self) -> Result<Vec<String>> {
        self.session.reset();

        let url = query::search_url(&self.config, &self.params)?;
        debug!("search: {url}");
        let response = self.fetch_page(url).await?;

        Ok(response.place_names())
    }

    /// Move forward one page
    ///
    /// Returns [`Page::End`] without a network call once the session has
    /// hit end-of-results. Asking for a next page when no token was ever
    /// issued is an error.
    pub async fn next_page(&mut self) -> Result<Page> {
        if self.session.is_exhausted() {
            return Ok(Page::End);
        }

        let token = self
            .session
            .next_token()
            .ok_or(Error::MissingPageToken)?
            .to_string();

        let url = query::page_url(&self.config, &token)?;
        debug!("next page: {url}");
        let response = self.fetch_page(url).await?;

        Ok(Page::Names(response.place_names()))
    }

    /// Move backward one page
    ///
    /// At the first-page boundary this short-circuits: the cached first-page
    /// names are returned with no network call, and asking again keeps
    /// returning them. Calling this before any search returns [`Page::End`].
    pub async fn previous_page(&mut self) -> Result<Page> {
        match self.session.rewind() {
            Rewind::FirstPage => {
                let Some(original) = self.session.original().cloned() else {
                    return Ok(Page::End);
                };

                debug!("previous page: serving cached first page");
                let names = original.place_names();
                self.session.record(original);
                Ok(Page::Names(names))
            }
            Rewind::Refetch(token) => {
                let url = query::page_url(&self.config, &token)?;
                debug!("previous page: {url}");
                let response = self.fetch_page(url).await?;
                Ok(Page::Names(response.place_names()))
            }
        }
    }

    /// Fetch the detail record for a place reference
    ///
    /// A details lookup is a side query; it never touches the pagination
    /// session or the search parameters.
    pub async fn details(&self, reference: &str) -> Result<PlaceDetails> {
        let url = query::details_url(&self.config, reference)?;
        debug!("details: {url}");

        let body = self.http.get_text(&url).await?;
        let details = decode::decode_details(&body)?;

        if details.status != STATUS_OK {
            return Err(Error::api_status(details.status.clone()));
        }

        Ok(details)
    }

    /// Fetch and decode one search-type page, recording bookkeeping
    ///
    /// A non-"OK" status surfaces as [`Error::ApiStatus`] before any
    /// bookkeeping happens, so a failed fetch leaves the session untouched.
    async fn fetch_page(&mut self, url: Url) -> Result<SearchResponse> {
        self.last_url = Some(url.clone());

        let body = self.http.get_text(&url).await?;
        let response = decode::decode_search(&body)?;

        if response.status != STATUS_OK {
            return Err(Error::api_status(response.status.clone()));
        }

        self.session.record(response.clone());
        Ok(response)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// URL of the most recent search-type request
    pub fn last_url(&self) -> Option<&Url> {
        self.last_url.as_ref()
    }

    /// Most recent search response
    pub fn current(&self) -> Option<&SearchResponse> {
        self.session.current()
    }

    /// First-page response of the active session
    pub fn original(&self) -> Option<&SearchResponse> {
        self.session.original()
    }

    /// Check if forward paging has hit end-of-results
    pub fn is_exhausted(&self) -> bool {
        self.session.is_exhausted()
    }

    /// Current search parameters
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Mutable search parameters; changes apply to the next `search`
    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for PlaceSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceSearchClient")
            .field("params", &self.params)
            .field("last_url", &self.last_url)
            .field("exhausted", &self.session.is_exhausted())
            .finish_non_exhaustive()
    }
}
