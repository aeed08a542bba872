//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::PlaceSearchClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::{Page, SearchParams};
use tracing::info;

/// Environment variable consulted when --api-key is not given
const API_KEY_ENV: &str = "PLACES_API_KEY";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Search {
                address,
                keywords,
                radius,
                place_type,
                pages,
            } => {
                self.search(
                    address.as_deref(),
                    keywords.as_deref(),
                    *radius,
                    place_type.as_deref(),
                    *pages,
                )
                .await
            }
            Commands::Details { reference } => self.details(reference).await,
        }
    }

    /// Resolve the API key from the CLI flag or environment
    fn api_key(&self) -> Result<String> {
        if let Some(key) = &self.cli.api_key {
            return Ok(key.clone());
        }
        std::env::var(API_KEY_ENV).map_err(|_| Error::missing_field("api_key"))
    }

    /// Build a config from the CLI arguments
    fn build_config(&self, place_type: Option<&str>) -> Result<ClientConfig> {
        let mut builder = ClientConfig::builder().api_key(self.api_key()?);
        if let Some(place_type) = place_type {
            builder = builder.place_type(place_type);
        }
        Ok(builder.build())
    }

    async fn search(
        &self,
        address: Option<&str>,
        keywords: Option<&str>,
        radius: Option<u32>,
        place_type: Option<&str>,
        pages: u32,
    ) -> Result<()> {
        let config = self.build_config(place_type)?;

        let mut params = SearchParams::new();
        if let Some(address) = address {
            params = params.address(address);
        }
        if let Some(keywords) = keywords {
            params = params.keywords(keywords);
        }
        if let Some(radius) = radius {
            params = params.radius(radius);
        }

        let mut client = PlaceSearchClient::with_params(config, params)?;
        let names = client.search().await?;
        self.print_page(1, &names, client.current())?;

        for n in 0..pages {
            match client.next_page().await? {
                Page::Names(names) => {
                    self.print_page(n + 2, &names, client.current())?;
                }
                Page::End => {
                    info!("end of results after {} page(s)", n + 1);
                    break;
                }
            }
        }

        Ok(())
    }

    async fn details(&self, reference: &str) -> Result<()> {
        let config = self.build_config(None)?;
        let client = PlaceSearchClient::new(config)?;
        let details = client.details(reference).await?;

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&details)?);
            }
            OutputFormat::Pretty => {
                let name = details.result["name"].as_str().unwrap_or("(unnamed)");
                println!("{name}");
                if let Some(address) = details.result["formatted_address"].as_str() {
                    println!("  {address}");
                }
                if let Some(phone) = details.result["formatted_phone_number"].as_str() {
                    println!("  {phone}");
                }
            }
        }

        Ok(())
    }

    fn print_page(
        &self,
        page: u32,
        names: &[String],
        response: Option<&crate::types::SearchResponse>,
    ) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                if let Some(response) = response {
                    println!("{}", serde_json::to_string(response)?);
                }
            }
            OutputFormat::Pretty => {
                println!("-- page {page} --");
                for name in names {
                    println!("{name}");
                }
            }
        }
        Ok(())
    }
}
