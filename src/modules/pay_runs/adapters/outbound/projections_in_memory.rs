// In memory projection repository and watermark repository.
//
// Stores pay run rows keyed by id and tracks the last processed event per projector.

use crate::modules::pay_runs::adapters::outbound::projections::{
    PayRunProjectionRepository, WatermarkRepository,
};
use crate::modules::pay_runs::core::pay_run::PayRunStatus;
use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::{
    PayRunRow, PayRunView,
};
use crate::modules::pay_runs::use_cases::view_pay_run_details::queries_port::{
    PayRunFilter, PayRunQueries,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, PayRunRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl PayRunProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: PayRunRow) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        self.rows.write().await.insert(row.pay_run_id.clone(), row);
        Ok(())
    }

    async fn mark_submitted(
        &self,
        pay_run_id: &str,
        submitted_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(pay_run_id)
            .ok_or_else(|| anyhow::anyhow!("pay run {pay_run_id} has no projected row"))?;
        if row.last_event_id.as_deref() == Some(last_event_id) {
            return Ok(());
        }
        row.status = PayRunStatus::Submitted;
        row.submitted_at = Some(submitted_at);
        row.last_event_id = Some(last_event_id.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl PayRunQueries for InMemoryProjections {
    async fn get_by_id(&self, pay_run_id: &str) -> anyhow::Result<Option<PayRunView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        Ok(self
            .rows
            .read()
            .await
            .get(pay_run_id)
            .cloned()
            .map(PayRunView::from))
    }

    async fn list(
        &self,
        filter: PayRunFilter,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<PayRunView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        let guard = self.rows.read().await;
        let mut items: Vec<PayRunRow> = guard
            .values()
            .filter(|row| filter.status.is_none_or(|status| row.status == status))
            .filter(|row| filter.pay_run_type.is_none_or(|t| row.pay_run_type == t))
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.pay_run_id.cmp(&a.pay_run_id))
        });

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(PayRunView::from)
            .collect())
    }
}
