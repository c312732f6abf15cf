use crate::modules::pay_runs::core::pay_run::{PayRunStatus, PayRunType};
use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::PayRunView;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
pub struct PayRunFilter {
    pub status: Option<PayRunStatus>,
    #[serde(rename = "type")]
    pub pay_run_type: Option<PayRunType>,
}

#[async_trait]
pub trait PayRunQueries {
    async fn get_by_id(&self, pay_run_id: &str) -> anyhow::Result<Option<PayRunView>>;

    /// Newest first.
    async fn list(
        &self,
        filter: PayRunFilter,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<PayRunView>>;
}
