use crate::modules::pay_runs::adapters::outbound::employee_directory::{
    EmployeeDirectory, InMemoryEmployeeDirectory,
};
use crate::modules::pay_runs::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::pay_runs::application::handler::{PayRunCommandHandler, stream_id_for};
use crate::modules::pay_runs::core::employee::Employee;
use crate::modules::pay_runs::core::events::PayRunEvent;
use crate::modules::pay_runs::use_cases::view_pay_run_details::handler::Projector;
use crate::modules::pay_runs::use_cases::view_pay_run_details::projection::PayRunView;
use crate::modules::pay_runs::use_cases::view_pay_run_details::queries_port::PayRunQueries;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use std::sync::Arc;

pub const PROJECTOR_NAME: &str = "pay_run_details";

pub type CommandHandler = PayRunCommandHandler<
    InMemoryEventStore<PayRunEvent>,
    InMemoryDomainOutbox,
    InMemoryEmployeeDirectory,
>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn PayRunQueries + Send + Sync>,
    pub employees: Arc<dyn EmployeeDirectory>,
    pub command_handler: Arc<CommandHandler>,
    pub event_store: Arc<InMemoryEventStore<PayRunEvent>>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
}

impl AppState {
    pub fn in_memory(topic: &str, employees: Vec<Employee>) -> Self {
        Self::with_event_store(topic, InMemoryEventStore::new(), employees)
    }

    pub fn with_event_store(
        topic: &str,
        event_store: InMemoryEventStore<PayRunEvent>,
        employees: Vec<Employee>,
    ) -> Self {
        let event_store = Arc::new(event_store);
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projections = Arc::new(InMemoryProjections::new());
        let directory = Arc::new(InMemoryEmployeeDirectory::new(employees));
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        let command_handler = Arc::new(PayRunCommandHandler::new(
            topic,
            event_store.clone(),
            outbox,
            directory.clone(),
        ));
        Self {
            queries: projections,
            employees: directory,
            command_handler,
            event_store,
            projector,
        }
    }

    /// Bring the read model of a stream up to date with the event store, so reads see a write as
    /// soon as it returns. Events an earlier request failed to project are applied too.
    pub async fn project_stream(&self, stream_id: &str) -> anyhow::Result<()> {
        let loaded = self.event_store.load(stream_id).await?;
        self.projector.catch_up(stream_id, &loaded.events).await?;
        Ok(())
    }

    /// Read a pay run, projecting its stream first when the read model has not seen it yet.
    pub async fn find_pay_run(&self, pay_run_id: &str) -> anyhow::Result<Option<PayRunView>> {
        if let Some(view) = self.queries.get_by_id(pay_run_id).await? {
            return Ok(Some(view));
        }
        self.project_stream(&stream_id_for(pay_run_id)).await?;
        self.queries.get_by_id(pay_run_id).await
    }
}
