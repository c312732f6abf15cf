// Operator input for an off-cycle pay run draft. Amounts stay as the raw text the operator
// typed; the decider owns the parsing and fallback rules.

use crate::shared::core::primitives::is_blank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOffCyclePayRun {
    pub pay_run_id: String,
    pub employee_id: String,
    pub reason: String,
    pub amount: String,
    pub previous_amount: String,
    pub revised_amount: String,
    pub payment_date: String,
    pub remarks: String,
    pub created_at: i64,
    pub created_by: String,
}

impl DraftOffCyclePayRun {
    /// Required fields the operator left blank. Either a flat amount or a revised amount will do.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.employee_id) {
            missing.push("employee_id");
        }
        if is_blank(&self.reason) {
            missing.push("reason");
        }
        if is_blank(&self.payment_date) {
            missing.push("payment_date");
        }
        if is_blank(&self.amount) && is_blank(&self.revised_amount) {
            missing.push("amount");
        }
        missing
    }

    /// Whether the submit action is enabled for this input.
    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
