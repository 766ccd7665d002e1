// src/pipeline/run.rs

//! End-to-end scraping pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CityRecord, Config};
use crate::pipeline::branch::{BranchResult, extract_all, fetch_all};
use crate::report::Reporter;
use crate::services::{PageFetcher, RecordExtractor};
use crate::storage::RecordSink;

/// What to do when a city branch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and keep the other cities' records
    #[default]
    Continue,
    /// Abort the run with the first failure; nothing reaches the sink
    FailFast,
}

impl FailurePolicy {
    /// Policy for a `fail_fast` configuration flag.
    pub fn from_flag(fail_fast: bool) -> Self {
        if fail_fast { Self::FailFast } else { Self::Continue }
    }
}

/// A city that produced no record.
#[derive(Debug)]
pub struct BranchFailure {
    pub city: String,
    pub error: AppError,
}

/// Statistics of a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunStats {
    /// Wall-clock duration of the run in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Records and failures of a completed run.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub records: Vec<CityRecord>,
    pub failures: Vec<BranchFailure>,
    pub stats: RunStats,
}

impl PipelineOutcome {
    /// Whether every requested city produced a record.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch-then-extract pipeline over a list of cities.
#[derive(Debug, Clone)]
pub struct CityPipeline {
    fetcher: PageFetcher,
    extractor: RecordExtractor,
    max_concurrent: usize,
    policy: FailurePolicy,
}

impl CityPipeline {
    /// Create a pipeline from its two stages.
    pub fn new(fetcher: PageFetcher, extractor: RecordExtractor) -> Self {
        Self {
            fetcher,
            extractor,
            max_concurrent: 1,
            policy: FailurePolicy::default(),
        }
    }

    /// Build the pipeline described by a configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = PageFetcher::new(config.fetcher.clone())?;
        let extractor = RecordExtractor::new(config.layout.clone())?;
        Ok(Self::new(fetcher, extractor)
            .with_concurrency(config.pipeline.max_concurrent)
            .with_policy(FailurePolicy::from_flag(config.pipeline.fail_fast)))
    }

    /// Set the maximum number of concurrent fetches.
    pub fn with_concurrency(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Set the failure policy.
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scrape every city without handing the records on.
    pub async fn scrape(
        &self,
        cities: &[String],
        reporter: &dyn Reporter,
    ) -> Result<PipelineOutcome> {
        let started_at = Utc::now();

        let pages = fetch_all(&self.fetcher, cities, self.max_concurrent, reporter).await;
        let branches = extract_all(&self.extractor, pages, reporter);

        let mut records = Vec::with_capacity(branches.len());
        let mut failures = Vec::new();
        for BranchResult { city, result } in branches {
            match result {
                Ok(record) => records.push(record),
                Err(error) => {
                    reporter.branch_failed(&city, &error);
                    if self.policy == FailurePolicy::FailFast {
                        return Err(error);
                    }
                    failures.push(BranchFailure { city, error });
                }
            }
        }

        let stats = RunStats {
            started_at,
            finished_at: Utc::now(),
            requested: cities.len(),
            succeeded: records.len(),
            failed: failures.len(),
        };
        reporter.run_completed(&stats);

        Ok(PipelineOutcome {
            records,
            failures,
            stats,
        })
    }

    /// Scrape every city and hand the records to `sink`.
    pub async fn run(
        &self,
        cities: &[String],
        sink: &dyn RecordSink,
        reporter: &dyn Reporter,
    ) -> Result<PipelineOutcome> {
        let outcome = self.scrape(cities, reporter).await?;
        sink.accept(&outcome.records).await?;
        Ok(outcome)
    }
}

/// Run the pipeline over the configured cities.
pub async fn run_pipeline(
    config: &Config,
    sink: &dyn RecordSink,
    reporter: &dyn Reporter,
) -> Result<PipelineOutcome> {
    config.validate()?;
    let pipeline = CityPipeline::from_config(config)?;
    pipeline.run(&config.cities, sink, reporter).await
}
