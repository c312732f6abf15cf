use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::pay_runs::core::pay_run::{PayRunStatus, PayRunType};
use crate::modules::pay_runs::use_cases::view_pay_run_details::details_view::PayRunDetailsView;
use crate::modules::pay_runs::use_cases::view_pay_run_details::queries_port::PayRunFilter;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DetailsParams {
    #[serde(rename = "type")]
    pub pay_run_type: Option<String>,
}

fn parse_type(raw: Option<&str>) -> Result<Option<PayRunType>, String> {
    raw.map(|value| value.parse::<PayRunType>().map_err(|e| e.to_string()))
        .transpose()
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DetailsParams>,
) -> impl IntoResponse {
    let expected_type = match parse_type(params.pay_run_type.as_deref()) {
        Ok(t) => t,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    let view = match state.find_pay_run(&id).await {
        Ok(Some(view)) => view,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "pay run not found"),
        Err(error) => {
            tracing::error!(%error, pay_run_id = %id, "pay run lookup failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        }
    };

    if let Some(expected) = expected_type.filter(|t| *t != view.pay_run_type) {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("pay run {id} is {}, not {expected}", view.pay_run_type),
        );
    }

    Json(PayRunDetailsView::new(view)).into_response()
}

#[derive(Deserialize)]
pub struct ListPayRunsParams {
    pub status: Option<PayRunStatus>,
    #[serde(rename = "type")]
    pub pay_run_type: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListPayRunsParams>,
) -> impl IntoResponse {
    let pay_run_type = match parse_type(params.pay_run_type.as_deref()) {
        Ok(t) => t,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };
    let filter = PayRunFilter {
        status: params.status,
        pay_run_type,
    };

    match state
        .queries
        .list(filter, params.offset.unwrap_or(0), params.limit.unwrap_or(20))
        .await
    {
        Ok(pay_runs) => Json(pay_runs).into_response(),
        Err(error) => {
            tracing::error!(%error, "pay run listing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
