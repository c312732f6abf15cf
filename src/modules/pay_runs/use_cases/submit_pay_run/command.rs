/// Operator approval of a drafted pay run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPayRun {
    pub pay_run_id: String,
    pub submitted_at: i64,
    pub submitted_by: String,
}
