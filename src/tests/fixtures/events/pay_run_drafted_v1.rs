// Canonical drafted event, matching json/pay_run_drafted_v1.json.

use crate::modules::pay_runs::core::events::v1::pay_run_drafted::PayRunDraftedV1;
use crate::modules::pay_runs::core::pay_run::{PayRun, PayRunStatus, PayRunType};
use crate::tests::fixtures::commands::draft_off_cycle_pay_run::DraftOffCyclePayRunBuilder;

pub fn make_pay_run_drafted_v1_event() -> PayRunDraftedV1 {
    let command = DraftOffCyclePayRunBuilder::new().build();
    PayRunDraftedV1 {
        pay_run: PayRun {
            id: command.pay_run_id,
            month: "November".to_string(),
            year: 2023,
            status: PayRunStatus::Draft,
            pay_run_type: PayRunType::OffCycle,
            total_amount: 3000.0,
            employee_count: 1,
            created_at: command.created_at,
            payment_date: command.payment_date,
            description: "Arrears - Asha Rao".to_string(),
            remarks: Some(command.remarks),
            reason_type: command.reason,
            employee_ids: vec![command.employee_id],
            is_taxable: None,
        },
        created_by: command.created_by,
    }
}
