use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::pay_runs::application::handler::stream_id_for;
use crate::modules::pay_runs::core::pay_run::{PayRun, PayRunType};
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::command::DraftOffCyclePayRun;
use crate::shell::http::{CURRENT_OPERATOR, application_error_response, error_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DraftOffCycleBody {
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub previous_amount: String,
    #[serde(default)]
    pub revised_amount: String,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub remarks: String,
}

/// Where the client goes next: the details screen of the new draft.
#[derive(Serialize)]
pub struct DraftCreatedResponse {
    pub pay_run_id: String,
    #[serde(rename = "type")]
    pub pay_run_type: PayRunType,
    pub location: String,
    pub pay_run: PayRun,
}

impl DraftCreatedResponse {
    pub fn new(pay_run: PayRun) -> Self {
        Self {
            pay_run_id: pay_run.id.clone(),
            pay_run_type: pay_run.pay_run_type,
            location: format!("/pay-runs/{}?type={}", pay_run.id, pay_run.pay_run_type),
            pay_run,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DraftOffCycleBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let pay_run_id = Uuid::now_v7().to_string();
    let stream_id = stream_id_for(&pay_run_id);
    let command = DraftOffCyclePayRun {
        pay_run_id,
        employee_id: body.employee_id,
        reason: body.reason,
        amount: body.amount,
        previous_amount: body.previous_amount,
        revised_amount: body.revised_amount,
        payment_date: body.payment_date,
        remarks: body.remarks,
        created_at: Utc::now().timestamp_millis(),
        created_by: CURRENT_OPERATOR.into(),
    };

    let pay_run = match state.command_handler.draft_off_cycle(command).await {
        Ok(pay_run) => pay_run,
        Err(error) => return application_error_response(error),
    };
    if let Err(error) = state.project_stream(&stream_id).await {
        tracing::error!(%error, stream_id = %stream_id, "inline projection failed");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
    }
    (StatusCode::CREATED, Json(DraftCreatedResponse::new(pay_run))).into_response()
}

#[cfg(test)]
mod draft_off_cycle_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::pay_runs::core::events::PayRunEvent;
    use crate::modules::pay_runs::use_cases::view_pay_run_details::queries_port::{
        PayRunFilter, PayRunQueries,
    };
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::employees::make_employees;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/pay-runs/off-cycle", post(handle))
            .with_state(state)
    }

    fn request(body: &'static str) -> Request<Body> {
        Request::post("/pay-runs/off-cycle")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_details_location() {
        let state = AppState::in_memory("pay-runs.test", make_employees());
        let body = r#"{"employee_id":"E1","reason":"Arrears","previous_amount":"2000","revised_amount":"5000","payment_date":"2025-12-15"}"#;

        let response = app(state.clone()).oneshot(request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let pay_run_id = json["pay_run_id"].as_str().unwrap().to_string();
        assert_eq!(json["type"], "offcycle");
        assert_eq!(
            json["location"],
            format!("/pay-runs/{pay_run_id}?type=offcycle")
        );
        assert_eq!(json["pay_run"]["total_amount"], 3000.0);

        let stored = state.queries.get_by_id(&pay_run_id).await.unwrap().unwrap();
        assert_eq!(stored.description, "Arrears - Asha Rao");
    }

    #[tokio::test]
    async fn it_should_return_422_and_store_nothing_when_the_payment_date_is_blank() {
        let state = AppState::in_memory("pay-runs.test", make_employees());
        let body = r#"{"employee_id":"E1","reason":"Arrears","amount":"1000","payment_date":""}"#;

        let response = app(state.clone()).oneshot(request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].as_str().unwrap().contains("payment_date"));
        let listed = state
            .queries
            .list(PayRunFilter::default(), 0, 10)
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let state = AppState::in_memory("pay-runs.test", make_employees());
        let response = app(state).oneshot(request("not-json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_event_store_is_offline() {
        let mut event_store = InMemoryEventStore::<PayRunEvent>::new();
        event_store.toggle_offline();
        let state = AppState::with_event_store("pay-runs.test", event_store, make_employees());
        let body = r#"{"employee_id":"E1","reason":"Arrears","amount":"1000","payment_date":"2025-12-15"}"#;

        let response = app(state).oneshot(request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
