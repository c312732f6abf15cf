use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::pay_runs::use_cases::view_pay_run_details::details_view::PayRunDetailsView;
use crate::shell::graphql::build_schema;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::draft_off_cycle_pay_run::DraftOffCyclePayRunBuilder;
use crate::tests::fixtures::employees::make_employees;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn drafts_views_and_submits_an_off_cycle_pay_run() {
    let app = router(AppState::in_memory("pay-runs.e2e", make_employees()));

    let (status, created) = send(
        &app,
        post_json(
            "/pay-runs/off-cycle",
            json!({
                "employee_id": "E1",
                "reason": "Arrears",
                "previous_amount": "2000",
                "revised_amount": "5000",
                "payment_date": "2025-12-15"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "offcycle");
    assert_eq!(created["pay_run"]["total_amount"], 3000.0);
    let description = created["pay_run"]["description"].as_str().unwrap();
    assert!(description.contains("Arrears"));
    assert!(description.contains("Asha Rao"));

    let id = created["pay_run_id"].as_str().unwrap().to_string();
    let location = created["location"].as_str().unwrap().to_string();
    assert_eq!(location, format!("/pay-runs/{id}?type=offcycle"));

    let (status, details) = send(&app, get(&location)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["pay_run"]["status"], "draft");
    assert_eq!(details["gross_pay"], 3000.0);
    assert_eq!(details["net_pay"], 3000.0);

    let (status, submitted) = send(
        &app,
        Request::post(format!("/pay-runs/{id}/submit"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submitted["status"], "submitted");

    let (status, list) = send(&app, get("/pay-runs?status=submitted")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["pay_run_id"], id.as_str());
    assert!(list[0]["submitted_at"].is_i64());

    let (status, _) = send(
        &app,
        Request::post(format!("/pay-runs/{id}/submit"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn drafts_a_taxable_one_time_bonus() {
    let app = router(AppState::in_memory("pay-runs.e2e", make_employees()));

    let (status, created) = send(
        &app,
        post_json(
            "/pay-runs/one-time",
            json!({
                "employee_id": "E2",
                "component": "bonus",
                "amount": "10000",
                "payment_date": "2025-01-01",
                "is_taxable": true
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "onetime");
    assert_eq!(created["pay_run"]["total_amount"], 10000.0);
    assert_eq!(created["pay_run"]["reason_type"], "Bonus");

    let (status, details) = send(&app, get(created["location"].as_str().unwrap())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        details["columns"],
        json!(["employee", "payment_date", "net_pay"])
    );
}

#[tokio::test]
async fn stores_nothing_when_the_payment_date_is_blank() {
    let app = router(AppState::in_memory("pay-runs.e2e", make_employees()));

    let (status, body) = send(
        &app,
        post_json(
            "/pay-runs/off-cycle",
            json!({
                "employee_id": "E1",
                "reason": "Arrears",
                "previous_amount": "2000",
                "revised_amount": "5000",
                "payment_date": ""
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("payment_date"));

    let (status, list) = send(&app, get("/pay-runs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn keeps_display_overrides_out_of_the_store() {
    let state = AppState::in_memory("pay-runs.e2e", make_employees());
    let app = router(state.clone());
    let (_, created) = send(
        &app,
        post_json(
            "/pay-runs/one-time",
            json!({
                "employee_id": "E3",
                "component": "incentive",
                "amount": "750",
                "payment_date": "2025-03-31"
            }),
        ),
    )
    .await;
    let id = created["pay_run_id"].as_str().unwrap();

    let view = state.queries.get_by_id(id).await.unwrap().unwrap();
    let mut details = PayRunDetailsView::new(view);
    details.open_edit();
    details.set_net_pay(700.0).unwrap();
    details.confirm_edit().unwrap();
    assert_eq!(details.net_pay, 700.0);

    let (_, reread) = send(&app, get(&format!("/pay-runs/{id}"))).await;
    assert_eq!(reread["net_pay"], 750.0);
    assert_eq!(reread["pay_run"]["total_amount"], 750.0);
}

#[tokio::test]
async fn drafts_and_submits_through_graphql() {
    let schema = build_schema(AppState::in_memory("pay-runs.e2e", make_employees()));

    let drafted = schema
        .execute(
            r#"mutation {
                draftOffCyclePayRun(input: {
                    employeeId: "E1", reason: "Arrears",
                    previousAmount: "2000", revisedAmount: "5000",
                    paymentDate: "2025-12-15"
                }) { id type totalAmount status }
            }"#,
        )
        .await;
    assert!(drafted.errors.is_empty(), "{:?}", drafted.errors);
    let data = drafted.data.into_json().unwrap();
    assert_eq!(data["draftOffCyclePayRun"]["type"], "OFFCYCLE");
    assert_eq!(data["draftOffCyclePayRun"]["totalAmount"], 3000.0);
    let id = data["draftOffCyclePayRun"]["id"].as_str().unwrap().to_string();

    let submitted = schema
        .execute(format!(
            r#"mutation {{ submitPayRun(id: "{id}") {{ status submittedAt }} }}"#
        ))
        .await;
    assert!(submitted.errors.is_empty(), "{:?}", submitted.errors);
    let data = submitted.data.into_json().unwrap();
    assert_eq!(data["submitPayRun"]["status"], "SUBMITTED");

    let details = schema
        .execute(format!(
            r#"{{ payRun(id: "{id}", type: OFFCYCLE) {{ grossPay netPay columns }} employees {{ id }} }}"#
        ))
        .await;
    assert!(details.errors.is_empty(), "{:?}", details.errors);
    let data = details.data.into_json().unwrap();
    assert_eq!(data["payRun"]["netPay"], 3000.0);
    assert_eq!(data["employees"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn submits_a_draft_whose_projection_never_ran() {
    let state = AppState::in_memory("pay-runs.e2e", make_employees());
    let pay_run = state
        .command_handler
        .draft_off_cycle(DraftOffCyclePayRunBuilder::new().build())
        .await
        .unwrap();
    let app = router(state);
    let submit = || {
        Request::post(format!("/pay-runs/{}/submit", pay_run.id))
            .body(Body::empty())
            .unwrap()
    };

    let (status, submitted) = send(&app, submit()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submitted["status"], "submitted");

    let (status, details) = send(&app, get(&format!("/pay-runs/{}", pay_run.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["pay_run"]["status"], "submitted");
    assert_eq!(details["pay_run"]["total_amount"], 3000.0);

    let (status, _) = send(&app, submit()).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn reads_a_draft_whose_projection_never_ran() {
    let state = AppState::in_memory("pay-runs.e2e", make_employees());
    let pay_run = state
        .command_handler
        .draft_off_cycle(DraftOffCyclePayRunBuilder::new().build())
        .await
        .unwrap();
    let app = router(state.clone());

    let (status, details) = send(&app, get(&format!("/pay-runs/{}", pay_run.id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["pay_run"]["status"], "draft");
    assert_eq!(state.projector.watermark(&format!("PayRun-{}", pay_run.id)).await.unwrap(), 1);
}
