use crate::modules::pay_runs::core::pay_run::{PayRun, PayRunStatus, PayRunType};

/// Read model row for a single pay run: the shared store every screen reads back by id.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PayRunRow {
    pub pay_run_id: String,
    pub month: String,
    pub year: i32,
    pub status: PayRunStatus,
    pub pay_run_type: PayRunType,
    pub total_amount: f64,
    pub employee_count: u32,
    pub created_at: i64,
    pub created_by: String,
    pub payment_date: String,
    pub description: String,
    pub remarks: Option<String>,
    pub reason_type: String,
    pub employee_ids: Vec<String>,
    pub is_taxable: Option<bool>,
    pub submitted_at: Option<i64>,
    pub last_event_id: Option<String>,
}

impl PayRunRow {
    pub fn from_draft(pay_run: &PayRun, created_by: &str, last_event_id: String) -> Self {
        Self {
            pay_run_id: pay_run.id.clone(),
            month: pay_run.month.clone(),
            year: pay_run.year,
            status: pay_run.status,
            pay_run_type: pay_run.pay_run_type,
            total_amount: pay_run.total_amount,
            employee_count: pay_run.employee_count,
            created_at: pay_run.created_at,
            created_by: created_by.to_string(),
            payment_date: pay_run.payment_date.clone(),
            description: pay_run.description.clone(),
            remarks: pay_run.remarks.clone(),
            reason_type: pay_run.reason_type.clone(),
            employee_ids: pay_run.employee_ids.clone(),
            is_taxable: pay_run.is_taxable,
            submitted_at: None,
            last_event_id: Some(last_event_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PayRunView {
    pub pay_run_id: String,
    pub month: String,
    pub year: i32,
    pub status: PayRunStatus,
    #[serde(rename = "type")]
    pub pay_run_type: PayRunType,
    pub total_amount: f64,
    pub employee_count: u32,
    pub created_at: i64,
    pub created_by: String,
    pub payment_date: String,
    pub description: String,
    pub remarks: Option<String>,
    pub reason_type: String,
    pub employee_ids: Vec<String>,
    pub is_taxable: Option<bool>,
    pub submitted_at: Option<i64>,
}

impl From<PayRunRow> for PayRunView {
    fn from(row: PayRunRow) -> Self {
        Self {
            pay_run_id: row.pay_run_id,
            month: row.month,
            year: row.year,
            status: row.status,
            pay_run_type: row.pay_run_type,
            total_amount: row.total_amount,
            employee_count: row.employee_count,
            created_at: row.created_at,
            created_by: row.created_by,
            payment_date: row.payment_date,
            description: row.description,
            remarks: row.remarks,
            reason_type: row.reason_type,
            employee_ids: row.employee_ids,
            is_taxable: row.is_taxable,
            submitted_at: row.submitted_at,
        }
    }
}
