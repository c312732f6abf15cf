// Translate a pay run event into read model mutations.
//
// last_event_id is "stream_id:version" so repositories can apply mutations idempotently.

use crate::modules::pay_runs::core::events::PayRunEvent;
use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::PayRunRow;

#[derive(Debug, PartialEq)]
pub enum Mutation {
    Upsert(PayRunRow),
    MarkSubmitted {
        pay_run_id: String,
        submitted_at: i64,
        last_event_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &PayRunEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        PayRunEvent::PayRunDraftedV1(details) => vec![Mutation::Upsert(PayRunRow::from_draft(
            &details.pay_run,
            &details.created_by,
            stream_key,
        ))],
        PayRunEvent::PayRunSubmittedV1(details) => vec![Mutation::MarkSubmitted {
            pay_run_id: details.pay_run_id.clone(),
            submitted_at: details.submitted_at,
            last_event_id: stream_key,
        }],
    }
}
