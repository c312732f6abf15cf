// Records that a pay run draft was built. Carries the full record snapshot as the builder
// computed it, so replay never re-runs the amount arithmetic.

use crate::modules::pay_runs::core::pay_run::PayRun;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct PayRunDraftedV1 {
    pub pay_run: PayRun,
    pub created_by: String,
}
