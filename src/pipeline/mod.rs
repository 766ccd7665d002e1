//! Pipeline entry points.
//!
//! - `fetch_all` / `extract_all`: the per-city fan-out stages
//! - `CityPipeline` / `run_pipeline`: both stages followed by the sink

pub mod branch;
pub mod run;

pub use branch::{BranchResult, extract_all, fetch_all};
pub use run::{BranchFailure, CityPipeline, FailurePolicy, PipelineOutcome, RunStats, run_pipeline};
