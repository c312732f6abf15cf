// Pure decision function for drafting a one-time payout.
//
// The total is the entered amount as is. Unlike off-cycle drafts there is no derived
// subtraction, and the record carries the taxability flag.

use crate::modules::pay_runs::core::decision::{DecideError, Decision};
use crate::modules::pay_runs::core::employee::{Employee, display_name};
use crate::modules::pay_runs::core::events::{
    PayRunEvent, v1::pay_run_drafted::PayRunDraftedV1,
};
use crate::modules::pay_runs::core::intents::PayRunIntent;
use crate::modules::pay_runs::core::pay_run::{
    OneTimeComponent, PayRun, PayRunStatus, PayRunType,
};
use crate::modules::pay_runs::core::state::PayRunState;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::command::DraftOneTimePayout;
use crate::shared::core::primitives::{month_and_year, non_blank, parse_amount};

pub fn decide_draft_one_time(
    state: &PayRunState,
    command: DraftOneTimePayout,
    employee: Option<&Employee>,
) -> Decision {
    if !matches!(state, PayRunState::None) {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }
    let missing = command.missing_fields();
    if !missing.is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingFields(missing),
        };
    }
    let component: OneTimeComponent = match command.component.parse() {
        Ok(component) => component,
        Err(unknown) => {
            return Decision::Rejected {
                reason: DecideError::UnknownComponent(unknown),
            };
        }
    };
    let Some(total_amount) = parse_amount(&command.amount) else {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount,
        };
    };
    let Some((month, year)) = month_and_year(command.created_at) else {
        return Decision::Rejected {
            reason: DecideError::InvalidCreatedAt,
        };
    };

    let label = component.label();
    let payload = PayRunDraftedV1 {
        pay_run: PayRun {
            id: command.pay_run_id,
            month,
            year,
            status: PayRunStatus::Draft,
            pay_run_type: PayRunType::OneTime,
            total_amount,
            employee_count: 1,
            created_at: command.created_at,
            payment_date: command.payment_date.trim().to_string(),
            description: format!("{label} - {}", display_name(employee)),
            remarks: non_blank(&command.remarks),
            reason_type: label.to_string(),
            employee_ids: vec![command.employee_id.trim().to_string()],
            is_taxable: Some(command.is_taxable),
        },
        created_by: command.created_by,
    };
    Decision::Accepted {
        events: vec![PayRunEvent::PayRunDraftedV1(payload.clone())],
        intents: vec![PayRunIntent::PublishPayRunDrafted { payload }],
    }
}
