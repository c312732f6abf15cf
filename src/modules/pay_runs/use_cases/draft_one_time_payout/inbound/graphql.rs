use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::pay_runs::application::handler::stream_id_for;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::command::DraftOneTimePayout;
use crate::modules::pay_runs::use_cases::view_pay_run_details::inbound::graphql::GqlPayRun;
use crate::shell::graphql::{command_error, internal_error};
use crate::shell::http::CURRENT_OPERATOR;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct DraftOneTimeInput {
    pub employee_id: String,
    pub component: String,
    pub amount: String,
    pub payment_date: String,
    #[graphql(default)]
    pub remarks: String,
    #[graphql(default)]
    pub is_taxable: bool,
}

#[derive(Default)]
pub struct DraftOneTimeMutation;

#[Object]
impl DraftOneTimeMutation {
    async fn draft_one_time_payout(
        &self,
        context: &Context<'_>,
        input: DraftOneTimeInput,
    ) -> GqlResult<GqlPayRun> {
        let state = context.data_unchecked::<AppState>();
        let pay_run_id = Uuid::now_v7().to_string();
        let stream_id = stream_id_for(&pay_run_id);

        let command = DraftOneTimePayout {
            pay_run_id,
            employee_id: input.employee_id,
            component: input.component,
            amount: input.amount,
            payment_date: input.payment_date,
            remarks: input.remarks,
            is_taxable: input.is_taxable,
            created_at: Utc::now().timestamp_millis(),
            created_by: CURRENT_OPERATOR.into(),
        };

        let pay_run = state
            .command_handler
            .draft_one_time(command)
            .await
            .map_err(command_error)?;
        state
            .project_stream(&stream_id)
            .await
            .map_err(internal_error)?;

        Ok(GqlPayRun::from_pay_run(pay_run, CURRENT_OPERATOR))
    }
}
