use crate::shared::core::primitives::is_blank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOneTimePayout {
    pub pay_run_id: String,
    pub employee_id: String,
    pub component: String,
    pub amount: String,
    pub payment_date: String,
    pub remarks: String,
    pub is_taxable: bool,
    pub created_at: i64,
    pub created_by: String,
}

impl DraftOneTimePayout {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("component", &self.component),
            ("payment_date", &self.payment_date),
            ("employee_id", &self.employee_id),
            ("amount", &self.amount),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(field, _)| field)
        .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
