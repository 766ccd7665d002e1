//! Sinks receiving finished city records.
//!
//! Durable storage lives outside this crate. A sink only has to accept the
//! batch of records produced by one run.

pub mod json;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CityRecord;

// Re-export for convenience
pub use json::JsonSink;
pub use memory::MemorySink;

/// Trait for record sinks.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Accept the records of a run, in branch order.
    async fn accept(&self, records: &[CityRecord]) -> Result<()>;
}
