// Shared test fixture for the DraftOffCyclePayRun command.
// Defaults come from json/draft_off_cycle_pay_run.json; setters override single fields.

use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::command::DraftOffCyclePayRun;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DraftOffCyclePayRunDto {
    pub pay_run_id: String,
    pub employee_id: String,
    pub reason: String,
    pub amount: String,
    pub previous_amount: String,
    pub revised_amount: String,
    pub payment_date: String,
    pub remarks: String,
}

pub struct DraftOffCyclePayRunBuilder {
    inner: DraftOffCyclePayRun,
}

impl Default for DraftOffCyclePayRunBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DraftOffCyclePayRunBuilder {
    pub fn new() -> Self {
        let dto: DraftOffCyclePayRunDto =
            serde_json::from_str(include_str!("json/draft_off_cycle_pay_run.json")).unwrap();

        Self {
            inner: DraftOffCyclePayRun {
                pay_run_id: dto.pay_run_id,
                employee_id: dto.employee_id,
                reason: dto.reason,
                amount: dto.amount,
                previous_amount: dto.previous_amount,
                revised_amount: dto.revised_amount,
                payment_date: dto.payment_date,
                remarks: dto.remarks,
                created_at: 1_700_000_000_000,
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

    pub fn reason(mut self, v: impl Into<String>) -> Self {
        self.inner.reason = v.into();
        self
    }

    pub fn amount(mut self, v: impl Into<String>) -> Self {
        self.inner.amount = v.into();
        self
    }

    pub fn previous_amount(mut self, v: impl Into<String>) -> Self {
        self.inner.previous_amount = v.into();
        self
    }

    pub fn revised_amount(mut self, v: impl Into<String>) -> Self {
        self.inner.revised_amount = v.into();
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

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> DraftOffCyclePayRun {
        self.inner
    }
}

#[cfg(test)]
mod draft_off_cycle_pay_run_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = DraftOffCyclePayRunBuilder::default().build();
        assert_eq!(built.pay_run_id, "pr-fixed-0001");
        assert_eq!(built.employee_id, "E1");
        assert_eq!(built.previous_amount, "2000");
        assert_eq!(built.revised_amount, "5000");
        assert_eq!(built.created_by, "user-fixed-0001");
        assert_eq!(built.created_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = DraftOffCyclePayRunBuilder::new()
            .pay_run_id("pr-123")
            .reason("Correction")
            .amount("10")
            .created_by("tester")
            .created_at(3333)
            .build();

        assert_eq!(custom.pay_run_id, "pr-123");
        assert_eq!(custom.reason, "Correction");
        assert_eq!(custom.amount, "10");
        assert_eq!(custom.created_by, "tester");
        assert_eq!(custom.created_at, 3333);
    }
}
