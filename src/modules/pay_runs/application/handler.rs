// Command handler for pay run streams.
//
// Every write follows the same path: load the stream, fold it into state, ask the decider,
// append the accepted events at the loaded version and hand the intents to the outbox. It is
// the only writer of pay run streams.

use crate::modules::pay_runs::adapters::outbound::employee_directory::EmployeeDirectory;
use crate::modules::pay_runs::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::pay_runs::application::errors::ApplicationError;
use crate::modules::pay_runs::core::decision::Decision;
use crate::modules::pay_runs::core::employee::Employee;
use crate::modules::pay_runs::core::events::PayRunEvent;
use crate::modules::pay_runs::core::evolve::evolve;
use crate::modules::pay_runs::core::pay_run::PayRun;
use crate::modules::pay_runs::core::state::PayRunState;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::command::DraftOffCyclePayRun;
use crate::modules::pay_runs::use_cases::draft_off_cycle_pay_run::decide::decide_draft_off_cycle;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::command::DraftOneTimePayout;
use crate::modules::pay_runs::use_cases::draft_one_time_payout::decide::decide_draft_one_time;
use crate::modules::pay_runs::use_cases::submit_pay_run::command::SubmitPayRun;
use crate::modules::pay_runs::use_cases::submit_pay_run::decide::decide_submit;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub fn stream_id_for(pay_run_id: &str) -> String {
    format!("PayRun-{pay_run_id}")
}

pub struct PayRunCommandHandler<TEventStore, TOutbox, TDirectory>
where
    TEventStore: EventStore<PayRunEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TDirectory: EmployeeDirectory + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    employees: Arc<TDirectory>,
}

impl<TEventStore, TOutbox, TDirectory> PayRunCommandHandler<TEventStore, TOutbox, TDirectory>
where
    TEventStore: EventStore<PayRunEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TDirectory: EmployeeDirectory + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        employees: Arc<TDirectory>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            employees,
        }
    }

    pub async fn draft_off_cycle(
        &self,
        command: DraftOffCyclePayRun,
    ) -> Result<PayRun, ApplicationError> {
        let stream_id = stream_id_for(&command.pay_run_id);
        let employee = self.lookup_employee(&command.employee_id).await?;
        let state = self
            .execute(&stream_id, |state| {
                decide_draft_off_cycle(state, command, employee.as_ref())
            })
            .await?;
        Self::into_pay_run(state)
    }

    pub async fn draft_one_time(
        &self,
        command: DraftOneTimePayout,
    ) -> Result<PayRun, ApplicationError> {
        let stream_id = stream_id_for(&command.pay_run_id);
        let employee = self.lookup_employee(&command.employee_id).await?;
        let state = self
            .execute(&stream_id, |state| {
                decide_draft_one_time(state, command, employee.as_ref())
            })
            .await?;
        Self::into_pay_run(state)
    }

    pub async fn submit(&self, command: SubmitPayRun) -> Result<PayRun, ApplicationError> {
        let stream_id = stream_id_for(&command.pay_run_id);
        let state = self
            .execute(&stream_id, |state| decide_submit(state, command))
            .await?;
        Self::into_pay_run(state)
    }

    async fn lookup_employee(&self, employee_id: &str) -> Result<Option<Employee>, ApplicationError> {
        let employee = self
            .employees
            .find(employee_id)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        if employee.is_none() {
            tracing::warn!(employee_id, "employee not found in directory");
        }
        Ok(employee)
    }

    async fn execute(
        &self,
        stream_id: &str,
        decide: impl FnOnce(&PayRunState) -> Decision,
    ) -> Result<PayRunState, ApplicationError> {
        let stream = self.event_store.load(stream_id).await?;
        let state = stream
            .events
            .iter()
            .cloned()
            .fold(PayRunState::None, evolve);

        match decide(&state) {
            Decision::Accepted { events, intents } => {
                self.event_store
                    .append(stream_id, stream.version, &events)
                    .await?;
                dispatch_intents(
                    &*self.outbox,
                    stream_id,
                    stream.version,
                    &self.topic,
                    intents,
                )
                .await?;
                tracing::info!(stream_id, version = stream.version + 1, "pay run stream appended");
                Ok(events.into_iter().fold(state, evolve))
            }
            Decision::Rejected { reason } => {
                tracing::warn!(stream_id, %reason, "pay run command rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }

    fn into_pay_run(state: PayRunState) -> Result<PayRun, ApplicationError> {
        state.pay_run().cloned().ok_or_else(|| {
            ApplicationError::Unexpected("accepted decision left no pay run".to_string())
        })
    }
}
