//! City record data structure.

use serde::{Deserialize, Serialize};

/// Demographic facts scraped from a single city page.
///
/// Every field is the text found on the page. Nothing is coerced to numbers,
/// so coordinates keep their degree and direction markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CityRecord {
    /// City name as shown in the page title
    pub city_name: String,

    /// Population cell text with citation markers removed
    pub population: String,

    /// Longitude text, e.g. `0°7′39″W`
    pub longitude: String,

    /// Latitude text, e.g. `51°30′26″N`
    pub latitude: String,
}
