// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains the data structures shared by the services and the
//! pipeline, organized by their primary purpose.

mod config;
mod layout;
mod record;

// Re-export all public types
pub use config::{CITY_PLACEHOLDER, Config, FetcherConfig, PipelineConfig};
pub use layout::PageLayout;
pub use record::CityRecord;
