// src/error.rs

//! Unified error handling for the scraper.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// The city page could not be fetched (network failure or non-success status)
    #[error("Failed to retrieve page for {city}: {source}")]
    Retrieval {
        city: String,
        #[source]
        source: reqwest::Error,
    },

    /// A required field is absent from an otherwise valid city page
    #[error("The page for {city} does not contain {field} data")]
    MissingField { city: String, field: String },

    /// A structural element the page layout relies on is missing
    #[error("The page fetched for {city} has no {element} element")]
    MalformedPage { city: String, element: String },

    /// HTTP client setup failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a retrieval error for a city.
    pub fn retrieval(city: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Retrieval {
            city: city.into(),
            source,
        }
    }

    /// Create a missing field error carrying the resolved city name.
    pub fn missing_field(city: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            city: city.into(),
            field: field.into(),
        }
    }

    /// Create a malformed page error.
    pub fn malformed_page(city: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MalformedPage {
            city: city.into(),
            element: element.into(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// City the error refers to, for branch-level errors.
    pub fn city(&self) -> Option<&str> {
        match self {
            Self::Retrieval { city, .. }
            | Self::MissingField { city, .. }
            | Self::MalformedPage { city, .. } => Some(city),
            _ => None,
        }
    }
}
