// Pure decision function for drafting an off-cycle pay run.
//
// The total is the revised amount minus the previous amount. When either side does not parse,
// the flat amount is used instead. A difference that overflows to infinity is not replaced by the
// flat amount. A draft whose total cannot be resolved to a finite number is rejected, so a stored
// record never carries NaN or infinity.

use crate::modules::pay_runs::core::decision::{DecideError, Decision};
use crate::modules::pay_runs::core::employee::{Employee, display_name};
use crate::modules::pay_runs::core::events::{
    PayRunEvent, v1::pay_run_drafted::PayRunDraftedV1,
};
use crate::modules::pay_runs::core::intents::PayRunIntent;
use crate::modules::pay_runs::core::pay_run::{PayRun, PayRunStatus, PayRunType};
use crate::modules::pay_runs::core::state::PayRunState;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::command::DraftOffCyclePayRun;
use crate::shared::core::primitives::{month_and_year, non_blank, parse_amount};

pub fn off_cycle_total(previous_amount: &str, revised_amount: &str, amount: &str) -> Option<f64> {
    match (parse_amount(revised_amount), parse_amount(previous_amount)) {
        (Some(revised), Some(previous)) => Some(revised - previous).filter(|t| t.is_finite()),
        _ => parse_amount(amount),
    }
}

pub fn decide_draft_off_cycle(
    state: &PayRunState,
    command: DraftOffCyclePayRun,
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
    let Some(total_amount) = off_cycle_total(
        &command.previous_amount,
        &command.revised_amount,
        &command.amount,
    ) else {
        return Decision::Rejected {
            reason: DecideError::InvalidAmount,
        };
    };
    let Some((month, year)) = month_and_year(command.created_at) else {
        return Decision::Rejected {
            reason: DecideError::InvalidCreatedAt,
        };
    };

    let reason = command.reason.trim().to_string();
    let employee_id = command.employee_id.trim().to_string();
    let payload = PayRunDraftedV1 {
        pay_run: PayRun {
            id: command.pay_run_id,
            month,
            year,
            status: PayRunStatus::Draft,
            pay_run_type: PayRunType::OffCycle,
            total_amount,
            employee_count: 1,
            created_at: command.created_at,
            payment_date: command.payment_date.trim().to_string(),
            description: format!("{reason} - {}", display_name(employee)),
            remarks: non_blank(&command.remarks),
            reason_type: reason,
            employee_ids: vec![employee_id],
            is_taxable: None,
        },
        created_by: command.created_by,
    };
    Decision::Accepted {
        events: vec![PayRunEvent::PayRunDraftedV1(payload.clone())],
        intents: vec![PayRunIntent::PublishPayRunDrafted { payload }],
    }
}
