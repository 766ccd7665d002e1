// src/models/layout.rs

//! Structural markers of a city page.

use serde::{Deserialize, Serialize};

/// Where each fact lives on a city page.
///
/// Defaults describe the English Wikipedia article layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageLayout {
    /// Tag of the page title element
    #[serde(default = "defaults::title_tag")]
    pub title_tag: String,

    /// Class of the page title element
    #[serde(default = "defaults::title_class")]
    pub title_class: String,

    /// Tag of the longitude and latitude elements
    #[serde(default = "defaults::coordinate_tag")]
    pub coordinate_tag: String,

    /// Class of the longitude element
    #[serde(default = "defaults::longitude_class")]
    pub longitude_class: String,

    /// Class of the latitude element
    #[serde(default = "defaults::latitude_class")]
    pub latitude_class: String,

    /// Class of the info-box row wrapping the population label
    #[serde(default = "defaults::row_class")]
    pub row_class: String,

    /// Label the population row must contain (case-sensitive)
    #[serde(default = "defaults::population_label")]
    pub population_label: String,

    /// Tag of the cell holding the population value
    #[serde(default = "defaults::value_tag")]
    pub value_tag: String,

    /// Regex removed from the population text
    #[serde(default = "defaults::citation_pattern")]
    pub citation_pattern: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            title_tag: defaults::title_tag(),
            title_class: defaults::title_class(),
            coordinate_tag: defaults::coordinate_tag(),
            longitude_class: defaults::longitude_class(),
            latitude_class: defaults::latitude_class(),
            row_class: defaults::row_class(),
            population_label: defaults::population_label(),
            value_tag: defaults::value_tag(),
            citation_pattern: defaults::citation_pattern(),
        }
    }
}

mod defaults {
    pub fn title_tag() -> String {
        "span".into()
    }
    pub fn title_class() -> String {
        "mw-page-title-main".into()
    }
    pub fn coordinate_tag() -> String {
        "span".into()
    }
    pub fn longitude_class() -> String {
        "longitude".into()
    }
    pub fn latitude_class() -> String {
        "latitude".into()
    }
    pub fn row_class() -> String {
        "mergedtoprow".into()
    }
    pub fn population_label() -> String {
        "Population".into()
    }
    pub fn value_tag() -> String {
        "td".into()
    }
    pub fn citation_pattern() -> String {
        r"\[.*?\]".into()
    }
}
