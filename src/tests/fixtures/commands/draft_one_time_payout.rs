// Shared test fixture for the DraftOneTimePayout command.

use crate::modules::pay_runs::use_cases::draft_one_time_payout::command::DraftOneTimePayout;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DraftOneTimePayoutDto {
    pub pay_run_id: String,
    pub employee_id: String,
    pub component: String,
    pub amount: String,
    pub payment_date: String,
    pub remarks: String,
    pub is_taxable: bool,
}

pub struct DraftOneTimePayoutBuilder {
    inner: DraftOneTimePayout,
}

impl Default for DraftOneTimePayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DraftOneTimePayoutBuilder {
    pub fn new() -> Self {
        let dto: DraftOneTimePayoutDto =
            serde_json::from_str(include_str!("json/draft_one_time_payout.json")).unwrap();

        Self {
            inner: DraftOneTimePayout {
                pay_run_id: dto.pay_run_id,
                employee_id: dto.employee_id,
                component: dto.component,
                amount: dto.amount,
                payment_date: dto.payment_date,
                remarks: dto.remarks,
                is_taxable: dto.is_taxable,
                created_at: 1_700_000_100_000,
                created_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn pay_run_id(mut self, v: impl Into<String>) -> Self {
        self.inner.pay_run_id = v.into();
        self
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = v.into();
        self
    }

    pub fn component(mut self, v: impl Into<String>) -> Self {
        self.inner.component = v.into();
        self
    }

    pub fn amount(mut self, v: impl Into<String>) -> Self {
        self.inner.amount = v.into();
        self
    }

    pub fn payment_date(mut self, v: impl Into<String>) -> Self {
        self.inner.payment_date = v.into();
        self
    }

    pub fn remarks(mut self, v: impl Into<String>) -> Self {
        self.inner.remarks = v.into();
        self
    }

    pub fn is_taxable(mut self, v: bool) -> Self {
        self.inner.is_taxable = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> DraftOneTimePayout {
        self.inner
    }
}
