// src/services/page.rs

//! Fetched pages and the narrow query interface the extractor relies on.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// Structural lookups over a parsed document.
///
/// Keeps the extractor independent of the HTML parser's API.
pub trait PageQuery {
    /// Handle to an element inside the document.
    type Element<'a>: Copy
    where
        Self: 'a;

    /// Name the page was requested under.
    fn subject(&self) -> &str;

    /// First element carrying `class`, optionally restricted to `tag`.
    fn find_by_class(&self, tag: Option<&str>, class: &str) -> Result<Option<Self::Element<'_>>>;

    /// First element carrying `class` whose text contains `needle`.
    fn find_by_class_containing(
        &self,
        class: &str,
        needle: &str,
    ) -> Result<Option<Self::Element<'_>>>;

    /// First `tag` element after the start of `element` in document order.
    fn find_next<'a>(
        &'a self,
        element: Self::Element<'a>,
        tag: &str,
    ) -> Option<Self::Element<'a>>;

    /// Concatenated text of an element and its descendants.
    fn text<'a>(&'a self, element: Self::Element<'a>) -> String;
}

/// A retrieved city page, parsed and ready for querying.
pub struct RawPage {
    city: String,
    url: String,
    document: Html,
}

impl RawPage {
    /// Parse an HTML body fetched for `city` from `url`.
    pub fn parse(city: impl Into<String>, url: impl Into<String>, html: &str) -> Self {
        Self {
            city: city.into(),
            url: url.into(),
            document: Html::parse_document(html),
        }
    }

    fn class_selector(tag: Option<&str>, class: &str) -> Result<Selector> {
        let css = match tag {
            Some(tag) => format!("{tag}.{class}"),
            None => format!(".{class}"),
        };
        Selector::parse(&css).map_err(|e| AppError::selector(&css, format!("{e:?}")))
    }
}

impl std::fmt::Debug for RawPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawPage")
            .field("city", &self.city)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl PageQuery for RawPage {
    type Element<'a> = ElementRef<'a>;

    fn subject(&self) -> &str {
        &self.city
    }

    fn find_by_class(&self, tag: Option<&str>, class: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = Self::class_selector(tag, class)?;
        Ok(self.document.select(&selector).next())
    }

    fn find_by_class_containing(
        &self,
        class: &str,
        needle: &str,
    ) -> Result<Option<ElementRef<'_>>> {
        let selector = Self::class_selector(None, class)?;
        Ok(self
            .document
            .select(&selector)
            .find(|element| self.text(*element).contains(needle)))
    }

    fn find_next<'a>(&'a self, element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
        let node = *element;

        // Descendants come first, then whatever follows the element and each
        // of its ancestors.
        let following = node.descendants().skip(1).chain(
            std::iter::once(node)
                .chain(node.ancestors())
                .flat_map(|n| n.next_siblings())
                .flat_map(|sibling| sibling.descendants()),
        );

        following
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag)
    }

    fn text<'a>(&'a self, element: ElementRef<'a>) -> String {
        element.text().collect()
    }
}
