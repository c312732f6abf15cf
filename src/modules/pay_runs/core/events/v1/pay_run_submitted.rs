#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct PayRunSubmittedV1 {
    pub pay_run_id: String,
    pub submitted_at: i64,
    pub submitted_by: String,
}
