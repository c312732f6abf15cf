use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::pay_runs::application::handler::stream_id_for;
use crate::modules::pay_runs::use_cases::submit_pay_run::command::SubmitPayRun;
use crate::modules::pay_runs::use_cases::view_pay_run_details::inbound::graphql::GqlPayRun;
use crate::shell::graphql::{command_error, internal_error};
use crate::shell::http::CURRENT_OPERATOR;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SubmitPayRunMutation;

#[Object]
impl SubmitPayRunMutation {
    async fn submit_pay_run(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlPayRun> {
        let state = context.data_unchecked::<AppState>();
        let pay_run_id = id.to_string();
        let stream_id = stream_id_for(&pay_run_id);

        let pay_run = state
            .command_handler
            .submit(SubmitPayRun {
                pay_run_id,
                submitted_at: Utc::now().timestamp_millis(),
                submitted_by: CURRENT_OPERATOR.into(),
            })
            .await
            .map_err(command_error)?;
        state
            .project_stream(&stream_id)
            .await
            .map_err(internal_error)?;

        // Re-read so the submission timestamp comes back with the record.
        let view = state
            .queries
            .get_by_id(&pay_run.id)
            .await
            .map_err(internal_error)?;
        Ok(match view {
            Some(view) => view.into(),
            None => GqlPayRun::from_pay_run(pay_run, CURRENT_OPERATOR),
        })
    }
}
