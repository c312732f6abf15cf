use crate::modules::pay_runs::core::events::v1::pay_run_drafted::PayRunDraftedV1;
use crate::modules::pay_runs::core::events::v1::pay_run_submitted::PayRunSubmittedV1;

/// Domain intents produced by the deciders as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq)]
pub enum PayRunIntent {
    PublishPayRunDrafted { payload: PayRunDraftedV1 },
    PublishPayRunSubmitted { payload: PayRunSubmittedV1 },
}
