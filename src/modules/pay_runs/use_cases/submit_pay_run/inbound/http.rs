use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;

use crate::modules::pay_runs::application::handler::stream_id_for;
use crate::modules::pay_runs::core::pay_run::PayRunStatus;
use crate::modules::pay_runs::use_cases::submit_pay_run::command::SubmitPayRun;
use crate::shell::http::{CURRENT_OPERATOR, application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SubmittedResponse {
    pub pay_run_id: String,
    pub status: PayRunStatus,
}

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let stream_id = stream_id_for(&id);
    let command = SubmitPayRun {
        pay_run_id: id,
        submitted_at: Utc::now().timestamp_millis(),
        submitted_by: CURRENT_OPERATOR.into(),
    };

    let pay_run = match state.command_handler.submit(command).await {
        Ok(pay_run) => pay_run,
        Err(error) => return application_error_response(error),
    };
    if let Err(error) = state.project_stream(&stream_id).await {
        tracing::error!(%error, stream_id = %stream_id, "inline projection failed");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
    }
    tracing::info!(pay_run_id = %pay_run.id, "pay run submitted");
    (
        StatusCode::OK,
        Json(SubmittedResponse {
            pay_run_id: pay_run.id,
            status: pay_run.status,
        }),
    )
        .into_response()
}
