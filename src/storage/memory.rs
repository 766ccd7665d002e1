//! In-memory sink.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CityRecord;
use crate::storage::RecordSink;

/// Collects records in memory, batch after batch.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CityRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything accepted so far.
    pub fn records(&self) -> Vec<CityRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn accept(&self, records: &[CityRecord]) -> Result<()> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(records);
        Ok(())
    }
}
