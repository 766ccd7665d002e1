// src/services/fetcher.rs

//! City page fetcher.
//!
//! Resolves a city name to its page URL and retrieves the page. Every call
//! performs a fresh request.

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::FetcherConfig;
use crate::report::Reporter;
use crate::services::page::RawPage;
use crate::utils::http;

/// Service for retrieving city pages.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    config: FetcherConfig,
    client: Client,
}

impl PageFetcher {
    /// Create a fetcher with its own HTTP client.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = http::create_client(&config)?;
        Ok(Self::with_client(config, client))
    }

    /// Create a fetcher sharing an existing client.
    pub fn with_client(config: FetcherConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// URL the page for `city_name` is fetched from.
    pub fn page_url(&self, city_name: &str) -> String {
        self.config.page_url(city_name)
    }

    /// Retrieve and parse the page for a city.
    pub async fn fetch(&self, city_name: &str, reporter: &dyn Reporter) -> Result<RawPage> {
        if city_name.is_empty() {
            return Err(AppError::validation("city name must not be empty"));
        }

        let url = self.page_url(city_name);
        reporter.fetch_started(city_name, &url);

        let body = http::fetch_text(&self.client, &url)
            .await
            .map_err(|e| AppError::retrieval(city_name, e))?;
        let page = RawPage::parse(city_name, url, &body);

        reporter.fetch_completed(city_name);
        Ok(page)
    }
}
