// In memory outbox for pay run intents.
//
// Rows are kept in enqueue order. A row is identified by its stream and stream version, and a
// second row with the same identity is refused without touching the stored rows.

use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct Ledger {
    rows: Vec<OutboxRow>,
    by_stream_version: HashMap<(String, i64), usize>,
}

#[derive(Default)]
pub struct InMemoryDomainOutbox {
    ledger: Mutex<Ledger>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Snapshot of every enqueued row, oldest first.
    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.ledger.lock().await.rows.clone()
    }

    pub async fn rows_for_stream(&self, stream_id: &str) -> Vec<OutboxRow> {
        self.ledger
            .lock()
            .await
            .rows
            .iter()
            .filter(|row| row.stream_id == stream_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Backend("Outbox offline".into()));
        }
        let mut ledger = self.ledger.lock().await;
        let key = (row.stream_id.clone(), row.stream_version);
        if ledger.by_stream_version.contains_key(&key) {
            return Err(OutboxError::Duplicate {
                stream_id: row.stream_id,
                stream_version: row.stream_version,
            });
        }
        let position = ledger.rows.len();
        ledger.by_stream_version.insert(key, position);
        ledger.rows.push(row);
        Ok(())
    }
}
