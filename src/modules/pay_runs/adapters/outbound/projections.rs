use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::PayRunRow;
use async_trait::async_trait;

#[async_trait]
pub trait PayRunProjectionRepository: Send + Sync {
    async fn upsert(&self, row: PayRunRow) -> anyhow::Result<()>;
    async fn mark_submitted(
        &self,
        pay_run_id: &str,
        submitted_at: i64,
        last_event_id: &str,
    ) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
