//! Service layer for the scraper.
//!
//! This module contains the business logic for:
//! - Page retrieval (`PageFetcher`)
//! - Record extraction (`RecordExtractor`)
//! - Document querying (`PageQuery`, implemented by `RawPage`)

mod extractor;
mod fetcher;
mod page;

pub use extractor::{POPULATION_FIELD, RecordExtractor};
pub use fetcher::PageFetcher;
pub use page::{PageQuery, RawPage};
