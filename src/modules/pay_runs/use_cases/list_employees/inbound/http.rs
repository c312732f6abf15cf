use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.employees.list().await {
        Ok(employees) => Json(employees).into_response(),
        Err(error) => {
            tracing::error!(%error, "employee directory failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}
