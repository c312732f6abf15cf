use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::pay_runs::application::handler::stream_id_for;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::inbound::http::DraftCreatedResponse;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::command::DraftOneTimePayout;
use crate::shell::http::{CURRENT_OPERATOR, application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DraftOneTimeBody {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub is_taxable: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DraftOneTimeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let pay_run_id = Uuid::now_v7().to_string();
    let stream_id = stream_id_for(&pay_run_id);
    let command = DraftOneTimePayout {
        pay_run_id,
        employee_id: body.employee_id,
        component: body.component,
        amount: body.amount,
        payment_date: body.payment_date,
        remarks: body.remarks,
        is_taxable: body.is_taxable,
        created_at: Utc::now().timestamp_millis(),
        created_by: CURRENT_OPERATOR.into(),
    };

    let pay_run = match state.command_handler.draft_one_time(command).await {
        Ok(pay_run) => pay_run,
        Err(error) => return application_error_response(error),
    };
    if let Err(error) = state.project_stream(&stream_id).await {
        tracing::error!(%error, stream_id = %stream_id, "inline projection failed");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
    }
    (StatusCode::CREATED, Json(DraftCreatedResponse::new(pay_run))).into_response()
}
