use crate::modules::pay_runs::core::events::PayRunEvent;
use crate::modules::pay_runs::core::pay_run::PayRunStatus;
use crate::modules::pay_runs::core::state::PayRunState;

pub fn evolve(state: PayRunState, event: PayRunEvent) -> PayRunState {
    match (state, event) {
        (PayRunState::None, PayRunEvent::PayRunDraftedV1(e)) => PayRunState::Drafted {
            pay_run: e.pay_run,
            created_by: e.created_by,
        },
        (
            PayRunState::Drafted {
                mut pay_run,
                created_by,
            },
            PayRunEvent::PayRunSubmittedV1(e),
        ) => {
            pay_run.status = PayRunStatus::Submitted;
            PayRunState::Submitted {
                pay_run,
                created_by,
                submitted_at: e.submitted_at,
                submitted_by: e.submitted_by,
            }
        }
        (state, _) => state,
    }
}
