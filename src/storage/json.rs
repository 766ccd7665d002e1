//! JSON sink writing to standard output.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::CityRecord;
use crate::storage::RecordSink;

/// Prints each batch of records as a JSON array.
#[derive(Debug, Clone, Copy)]
pub struct JsonSink {
    pretty: bool,
}

impl JsonSink {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize a batch the way it is printed.
    pub fn render(&self, records: &[CityRecord]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(json)
    }
}

impl Default for JsonSink {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl RecordSink for JsonSink {
    async fn accept(&self, records: &[CityRecord]) -> Result<()> {
        let mut json = self.render(records)?;
        json.push('\n');

        let mut stdout = tokio::io::stdout();
        stdout.write_all(json.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_compact() {
        let records = vec![CityRecord {
            city_name: "Stockholm".to_string(),
            population: "984,748".to_string(),
            longitude: "18°04′07″E".to_string(),
            latitude: "59°19′46″N".to_string(),
        }];
        let json = JsonSink::new(false).render(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"city_name":"Stockholm","population":"984,748","longitude":"18°04′07″E","latitude":"59°19′46″N"}]"#
        );
    }

    #[test]
    fn test_render_empty_batch() {
        assert_eq!(JsonSink::default().render(&[]).unwrap(), "[]");
    }
}
