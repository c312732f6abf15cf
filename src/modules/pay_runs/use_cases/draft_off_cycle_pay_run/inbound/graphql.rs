use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::pay_runs::application::handler::stream_id_for;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::command::DraftOffCyclePayRun;
use crate::modules::pay_runs::use_cases::view_pay_run_details::inbound::graphql::GqlPayRun;
use crate::shell::graphql::{command_error, internal_error};
use crate::shell::http::CURRENT_OPERATOR;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct DraftOffCycleInput {
    pub employee_id: String,
    pub reason: String,
    #[graphql(default)]
    pub amount: String,
    #[graphql(default)]
    pub previous_amount: String,
    #[graphql(default)]
    pub revised_amount: String,
    pub payment_date: String,
    #[graphql(default)]
    pub remarks: String,
}

#[derive(Default)]
pub struct DraftOffCycleMutation;

#[Object]
impl DraftOffCycleMutation {
    async fn draft_off_cycle_pay_run(
        &self,
        context: &Context<'_>,
        input: DraftOffCycleInput,
    ) -> GqlResult<GqlPayRun> {
        let state = context.data_unchecked::<AppState>();
        let pay_run_id = Uuid::now_v7().to_string();
        let stream_id = stream_id_for(&pay_run_id);

        let command = DraftOffCyclePayRun {
            pay_run_id,
            employee_id: input.employee_id,
            reason: input.reason,
            amount: input.amount,
            previous_amount: input.previous_amount,
            revised_amount: input.revised_amount,
            payment_date: input.payment_date,
            remarks: input.remarks,
            created_at: Utc::now().timestamp_millis(),
            created_by: CURRENT_OPERATOR.into(),
        };

        let pay_run = state
            .command_handler
            .draft_off_cycle(command)
            .await
            .map_err(command_error)?;

        // Inline projection so queries see the new row immediately
        state
            .project_stream(&stream_id)
            .await
            .map_err(internal_error)?;

        Ok(GqlPayRun::from_pay_run(pay_run, CURRENT_OPERATOR))
    }
}
