// src/services/extractor.rs

//! City record extraction.
//!
//! Reads the title, coordinates and population of a city page through the
//! [`PageQuery`] interface.

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{CityRecord, PageLayout};
use crate::report::Reporter;
use crate::services::page::PageQuery;

/// Field name reported when no population row exists.
pub const POPULATION_FIELD: &str = "population";

/// Turns parsed city pages into [`CityRecord`]s.
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    layout: PageLayout,
    citation: Regex,
}

impl RecordExtractor {
    /// Create an extractor for the given page layout.
    pub fn new(layout: PageLayout) -> Result<Self> {
        let citation = Regex::new(&layout.citation_pattern)
            .map_err(|e| AppError::selector(&layout.citation_pattern, e))?;
        Ok(Self { layout, citation })
    }

    /// Extract a record from a single page.
    ///
    /// Fails with [`AppError::MissingField`] when the page has no population
    /// row, and with [`AppError::MalformedPage`] when the title or a
    /// coordinate element is missing.
    pub fn extract<P: PageQuery>(&self, page: &P, reporter: &dyn Reporter) -> Result<CityRecord> {
        let layout = &self.layout;

        let title = page
            .find_by_class(Some(layout.title_tag.as_str()), &layout.title_class)?
            .ok_or_else(|| AppError::malformed_page(page.subject(), "title"))?;
        let city_name = page.text(title);
        reporter.extract_started(&city_name);

        let longitude = self.required_text(page, &layout.longitude_class, "longitude")?;
        let latitude = self.required_text(page, &layout.latitude_class, "latitude")?;

        let row = page
            .find_by_class_containing(&layout.row_class, &layout.population_label)?
            .ok_or_else(|| AppError::missing_field(&city_name, POPULATION_FIELD))?;
        let cell = page
            .find_next(row, &layout.value_tag)
            .ok_or_else(|| AppError::missing_field(&city_name, POPULATION_FIELD))?;
        let population = self.strip_citations(&page.text(cell));

        Ok(CityRecord {
            city_name,
            population,
            longitude,
            latitude,
        })
    }

    /// Remove citation markers such as `[1]` from text.
    pub fn strip_citations(&self, text: &str) -> String {
        self.citation.replace_all(text, "").into_owned()
    }

    fn required_text<P: PageQuery>(&self, page: &P, class: &str, element: &str) -> Result<String> {
        let found = page
            .find_by_class(Some(self.layout.coordinate_tag.as_str()), class)?
            .ok_or_else(|| AppError::malformed_page(page.subject(), element))?;
        Ok(page.text(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NullReporter;
    use crate::services::page::RawPage;

    fn city_page(title: &str, population_row: Option<&str>) -> String {
        let row = population_row
            .map(|cell| {
                format!(
                    r#"<tr class="mergedtoprow"><th class="infobox-label">Population <span>(2019)</span></th>
                       <td class="infobox-data">{cell}</td></tr>"#
                )
            })
            .unwrap_or_default();
        format!(
            r#"<html><body>
                 <h1 id="firstHeading"><span class="mw-page-title-main">{title}</span></h1>
                 <table class="infobox">
                   <tr class="mergedtoprow"><th>Country</th><td>United Kingdom</td></tr>
                   {row}
                 </table>
                 <span class="geo-dms"><span class="latitude">51°30′26″N</span>
                 <span class="longitude">0°7′39″W</span></span>
               </body></html>"#
        )
    }

    fn extractor() -> RecordExtractor {
        RecordExtractor::new(PageLayout::default()).unwrap()
    }

    fn extract(html: &str, city: &str) -> Result<CityRecord> {
        let page = RawPage::parse(city, format!("https://example.org/wiki/{city}"), html);
        extractor().extract(&page, &NullReporter)
    }

    #[test]
    fn test_extracts_london_record() {
        let html = city_page("London", Some("8,982,000<sup>[1]</sup>"));
        let record = extract(&html, "London").unwrap();
        assert_eq!(
            record,
            CityRecord {
                city_name: "London".to_string(),
                population: "8,982,000".to_string(),
                longitude: "0°7′39″W".to_string(),
                latitude: "51°30′26″N".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_population_names_resolved_city() {
        let html = city_page("Nowhereville", None);
        let err = extract(&html, "Nowhereville").unwrap_err();
        match err {
            AppError::MissingField { city, field } => {
                assert_eq!(city, "Nowhereville");
                assert_eq!(field, POPULATION_FIELD);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_field_uses_title_not_slug() {
        let html = city_page("Nowhereville", None);
        let err = extract(&html, "Nowhereville_(town)").unwrap_err();
        assert_eq!(err.city(), Some("Nowhereville"));
    }

    #[test]
    fn test_population_label_is_case_sensitive() {
        let html = city_page("Lowtown", None).replace(
            "<th>Country</th><td>United Kingdom</td>",
            "<th>population</th><td>12</td>",
        );
        assert!(matches!(
            extract(&html, "Lowtown"),
            Err(AppError::MissingField { .. })
        ));
    }

    #[test]
    fn test_missing_title_is_malformed() {
        let html = city_page("London", Some("1")).replace("mw-page-title-main", "other");
        match extract(&html, "London").unwrap_err() {
            AppError::MalformedPage { city, element } => {
                assert_eq!(city, "London");
                assert_eq!(element, "title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_longitude_is_malformed() {
        let html = city_page("London", Some("1")).replace("class=\"longitude\"", "");
        assert!(matches!(
            extract(&html, "London"),
            Err(AppError::MalformedPage { element, .. }) if element == "longitude"
        ));
    }

    #[test]
    fn test_coordinates_only_match_configured_tag() {
        let html = city_page("London", Some("1")).replace(
            "<th>Country</th>",
            r#"<th class="latitude">Lat</th><th class="longitude">Lon</th>"#,
        );
        let record = extract(&html, "London").unwrap();
        assert_eq!(record.latitude, "51°30′26″N");
        assert_eq!(record.longitude, "0°7′39″W");
    }

    #[test]
    fn test_coordinate_without_span_is_malformed() {
        let html = city_page("London", Some("1")).replace(
            r#"<span class="latitude">51°30′26″N</span>"#,
            r#"<div class="latitude">51°30′26″N</div>"#,
        );
        assert!(matches!(
            extract(&html, "London"),
            Err(AppError::MalformedPage { element, .. }) if element == "latitude"
        ));
    }

    #[test]
    fn test_empty_coordinates_are_accepted() {
        let html = city_page("London", Some("1"))
            .replace("51°30′26″N", "")
            .replace("0°7′39″W", "");
        let record = extract(&html, "London").unwrap();
        assert!(record.latitude.is_empty());
        assert!(record.longitude.is_empty());
    }

    #[test]
    fn test_population_without_cell_is_missing() {
        let html = r#"<html><body>
            <span class="mw-page-title-main">Edge</span>
            <span class="latitude">1°N</span><span class="longitude">1°E</span>
            <div class="mergedtoprow">Population</div>
        </body></html>"#;
        assert!(matches!(
            extract(html, "Edge"),
            Err(AppError::MissingField { .. })
        ));
    }

    #[test]
    fn test_population_in_following_row() {
        let html = city_page("Tokyo", None).replace(
            "</table>",
            r#"<tr class="mergedtoprow"><th colspan="2">Population<sup>[3]</sup></th></tr>
               <tr class="mergeddatarow"><th>• Metro</th><td>37,468,000[4][5]</td></tr>
               </table>"#,
        );
        let record = extract(&html, "Tokyo").unwrap();
        assert_eq!(record.population, "37,468,000");
    }

    #[test]
    fn test_strip_citations() {
        let extractor = extractor();
        assert_eq!(extractor.strip_citations("8,982,000[1]"), "8,982,000");
        assert_eq!(extractor.strip_citations("1,000[a] (est.)[note 2]"), "1,000 (est.)");
        assert_eq!(extractor.strip_citations("no markers"), "no markers");
    }

    #[test]
    fn test_strip_citations_is_idempotent() {
        let extractor = extractor();
        for input in ["8,982,000[1]", "a[[b]]c", "x[1]y[", "]odd[", "[1]\n[2"] {
            let once = extractor.strip_citations(input);
            assert_eq!(extractor.strip_citations(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_invalid_citation_pattern() {
        let layout = PageLayout {
            citation_pattern: "[oops".to_string(),
            ..PageLayout::default()
        };
        assert!(matches!(
            RecordExtractor::new(layout),
            Err(AppError::Selector { .. })
        ));
    }
}
