use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::pay_runs::application::errors::ApplicationError;
use crate::modules::pay_runs::core::decision::DecideError;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::inbound::http as off_cycle_http;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::inbound::http as one_time_http;
use crate::modules::pay_runs::use_cases::list_employees::inbound::http as employees_http;
use crate::modules::pay_runs::use_cases::submit_pay_run::inbound::http as submit_http;
use crate::modules::pay_runs::use_cases::view_pay_run_details::inbound::http as details_http;
use crate::shell::state::AppState;

/// Stand-in for the signed-in operator until sessions exist.
pub const CURRENT_OPERATOR: &str = "operator-from-session";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/pay-runs", get(details_http::list))
        .route("/pay-runs/off-cycle", post(off_cycle_http::handle))
        .route("/pay-runs/one-time", post(one_time_http::handle))
        .route("/pay-runs/{id}", get(details_http::handle))
        .route("/pay-runs/{id}/submit", post(submit_http::handle))
        .route("/employees", get(employees_http::handle))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(DecideError::NotFound) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(DecideError::AlreadyExists | DecideError::AlreadySubmitted) => {
            StatusCode::CONFLICT
        }
        ApplicationError::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::VersionConflict(
            crate::shared::infrastructure::event_store::EventStoreError::VersionMismatch { .. },
        ) => StatusCode::CONFLICT,
        ApplicationError::VersionConflict(_)
        | ApplicationError::Outbox(_)
        | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn application_error_response(error: ApplicationError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(%error, "pay run command failed");
        return error_response(status, "internal error");
    }
    error_response(status, error.to_string())
}
