// src/report.rs

//! Progress reporting passed explicitly into each component.

use crate::error::AppError;
use crate::pipeline::RunStats;

/// Receives progress events from the fetcher, the extractor and the pipeline.
///
/// All methods default to doing nothing.
pub trait Reporter: Send + Sync {
    /// A page retrieval is about to start.
    fn fetch_started(&self, _city: &str, _url: &str) {}

    /// A page was retrieved and parsed.
    fn fetch_completed(&self, _city: &str) {}

    /// Extraction started for the page titled `city`.
    fn extract_started(&self, _city: &str) {}

    /// A branch ended without a record.
    fn branch_failed(&self, _city: &str, _error: &AppError) {}

    /// The whole run finished.
    fn run_completed(&self, _stats: &RunStats) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn fetch_started(&self, city: &str, url: &str) {
        log::info!("Retrieving Wikipedia page for {} city ({})...", city, url);
    }

    fn fetch_completed(&self, city: &str) {
        log::info!("Retrieved Wikipedia page for {} city.", city);
    }

    fn extract_started(&self, city: &str) {
        log::info!("Retrieving information about {} city...", city);
    }

    fn branch_failed(&self, city: &str, error: &AppError) {
        log::warn!("✗ {}: {}", city, error);
    }

    fn run_completed(&self, stats: &RunStats) {
        log::info!(
            "[SUMMARY] {} requested, {} succeeded, {} failed in {}ms",
            stats.requested,
            stats.succeeded,
            stats.failed,
            stats.elapsed_ms()
        );
    }
}
