// src/pipeline/branch.rs

//! Per-city fan-out stages.
//!
//! Each city is an independent branch: its page is fetched, then extracted.
//! A failure ends only that branch.

use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::CityRecord;
use crate::report::Reporter;
use crate::services::{PageFetcher, RawPage, RecordExtractor};

/// Outcome of one stage for one city.
#[derive(Debug)]
pub struct BranchResult<T> {
    /// City name the branch was started with
    pub city: String,
    pub result: Result<T>,
}

impl<T> BranchResult<T> {
    /// Continue the branch with the next stage, skipping it on failure.
    pub fn and_then<U>(self, stage: impl FnOnce(T) -> Result<U>) -> BranchResult<U> {
        BranchResult {
            city: self.city,
            result: self.result.and_then(stage),
        }
    }
}

/// Fetch every city page, at most `concurrency` requests at a time.
///
/// Results come back in input order.
pub async fn fetch_all(
    fetcher: &PageFetcher,
    cities: &[String],
    concurrency: usize,
    reporter: &dyn Reporter,
) -> Vec<BranchResult<RawPage>> {
    stream::iter(cities)
        .map(|city| async move {
            let result = fetcher.fetch(city, reporter).await;
            BranchResult {
                city: city.clone(),
                result,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Extract a record from every successfully fetched page.
///
/// Pages are consumed; failed fetches pass through untouched.
pub fn extract_all(
    extractor: &RecordExtractor,
    pages: Vec<BranchResult<RawPage>>,
    reporter: &dyn Reporter,
) -> Vec<BranchResult<CityRecord>> {
    pages
        .into_iter()
        .map(|branch| branch.and_then(|page| extractor.extract(&page, reporter)))
        .collect()
}
