//! Application configuration structures.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::PageLayout;

/// Placeholder substituted with the city name in the URL template.
pub const CITY_PLACEHOLDER: &str = "{city_name}";

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Cities to scrape, used verbatim as page slugs
    #[serde(default = "defaults::cities")]
    pub cities: Vec<String>,

    /// HTTP settings
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Fan-out settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Page structure markers
    #[serde(default)]
    pub layout: PageLayout,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Render configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.pipeline.max_concurrent == 0 {
            return Err(AppError::validation("pipeline.max_concurrent must be > 0"));
        }
        if !self.fetcher.url_template.contains(CITY_PLACEHOLDER) {
            return Err(AppError::validation(format!(
                "fetcher.url_template must contain {CITY_PLACEHOLDER}"
            )));
        }
        url::Url::parse(&self.fetcher.page_url("London"))?;
        if self.cities.iter().any(|city| city.is_empty()) {
            return Err(AppError::validation("cities must not contain empty names"));
        }
        Regex::new(&self.layout.citation_pattern)
            .map_err(|e| AppError::config(format!("layout.citation_pattern: {e}")))?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cities: defaults::cities(),
            fetcher: FetcherConfig::default(),
            pipeline: PipelineConfig::default(),
            layout: PageLayout::default(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Page URL with a `{city_name}` placeholder
    #[serde(default = "defaults::url_template")]
    pub url_template: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl FetcherConfig {
    /// Substitute a city name into the URL template, verbatim.
    pub fn page_url(&self, city_name: &str) -> String {
        self.url_template.replace(CITY_PLACEHOLDER, city_name)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url_template: defaults::url_template(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Fan-out behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum concurrent page fetches
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Abort the whole run when any city fails
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent: defaults::max_concurrent(),
            fail_fast: false,
        }
    }
}

mod defaults {
    pub fn cities() -> Vec<String> {
        ["London", "Tokyo", "Milan", "Stockholm"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn url_template() -> String {
        "https://en.wikipedia.org/wiki/{city_name}".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; city-facts/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        4
    }
}
