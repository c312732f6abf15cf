use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::pay_runs::application::errors::ApplicationError;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::inbound::graphql::DraftOffCycleMutation;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::inbound::graphql::DraftOneTimeMutation;
use crate::modules::pay_runs::use_cases::list_employees::inbound::graphql::EmployeesQuery;
use crate::modules::pay_runs::use_cases::submit_pay_run::inbound::graphql::SubmitPayRunMutation;
use crate::modules::pay_runs::use_cases::view_pay_run_details::inbound::graphql::PayRunQuery;
use crate::shell::http::status_for;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(PayRunQuery, EmployeesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(DraftOffCycleMutation, DraftOneTimeMutation, SubmitPayRunMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Resolver error for a rejected or failed command. Backend failures are logged and hidden.
pub fn command_error(error: ApplicationError) -> async_graphql::Error {
    if status_for(&error).is_server_error() {
        tracing::error!(%error, "pay run command failed");
        return async_graphql::Error::new("internal error");
    }
    async_graphql::Error::new(error.to_string())
}

pub fn internal_error(error: anyhow::Error) -> async_graphql::Error {
    tracing::error!(%error, "pay run read failed");
    async_graphql::Error::new("internal error")
}
