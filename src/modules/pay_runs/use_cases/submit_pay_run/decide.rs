use crate::modules::pay_runs::core::decision::{DecideError, Decision};
use crate::modules::pay_runs::core::events::{
    PayRunEvent, v1::pay_run_submitted::PayRunSubmittedV1,
};
use crate::modules::pay_runs::core::intents::PayRunIntent;
use crate::modules::pay_runs::core::state::PayRunState;
use crate::modules::pay_runs::use_cases::submit_pay_run::command::SubmitPayRun;

pub fn decide_submit(state: &PayRunState, command: SubmitPayRun) -> Decision {
    match state {
        PayRunState::None => Decision::Rejected {
            reason: DecideError::NotFound,
        },
        PayRunState::Submitted { .. } => Decision::Rejected {
            reason: DecideError::AlreadySubmitted,
        },
        PayRunState::Drafted { .. } => {
            let payload = PayRunSubmittedV1 {
                pay_run_id: command.pay_run_id,
                submitted_at: command.submitted_at,
                submitted_by: command.submitted_by,
            };
            Decision::Accepted {
                events: vec![PayRunEvent::PayRunSubmittedV1(payload.clone())],
                intents: vec![PayRunIntent::PublishPayRunSubmitted { payload }],
            }
        }
    }
}
