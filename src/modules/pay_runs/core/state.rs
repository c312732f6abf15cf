// Lifecycle of a single pay run after folding its events.

use crate::modules::pay_runs::core::pay_run::PayRun;

#[derive(Debug, Clone, PartialEq)]
pub enum PayRunState {
    None,
    Drafted {
        pay_run: PayRun,
        created_by: String,
    },
    Submitted {
        pay_run: PayRun,
        created_by: String,
        submitted_at: i64,
        submitted_by: String,
    },
}

impl PayRunState {
    pub fn pay_run(&self) -> Option<&PayRun> {
        match self {
            PayRunState::None => None,
            PayRunState::Drafted { pay_run, .. } | PayRunState::Submitted { pay_run, .. } => {
                Some(pay_run)
            }
        }
    }
}
