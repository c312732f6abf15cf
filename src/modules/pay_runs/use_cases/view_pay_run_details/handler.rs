use crate::modules::pay_runs::adapters::outbound::projections::{
    PayRunProjectionRepository, WatermarkRepository,
};
use crate::modules::pay_runs::core::events::PayRunEvent;
use crate::modules::pay_runs::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: PayRunProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: PayRunProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &PayRunEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::MarkSubmitted {
                    pay_run_id,
                    submitted_at,
                    last_event_id,
                } => {
                    self.repository
                        .mark_submitted(&pay_run_id, submitted_at, &last_event_id)
                        .await?
                }
            }
        }
        self.watermark_repository
            .set(&self.watermark_key(stream_id), &version.to_string())
            .await?;
        Ok(())
    }

    /// Last stream version this projector applied, or 0 when it has seen nothing.
    pub async fn watermark(&self, stream_id: &str) -> anyhow::Result<i64> {
        match self
            .watermark_repository
            .get(&self.watermark_key(stream_id))
            .await?
        {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("corrupt watermark {raw:?} for {stream_id}: {e}")),
            None => Ok(0),
        }
    }

    /// Apply every event of a loaded stream past the watermark, in order. Returns how many ran.
    pub async fn catch_up(&self, stream_id: &str, events: &[PayRunEvent]) -> anyhow::Result<usize> {
        let watermark = self.watermark(stream_id).await?;
        let mut applied = 0;
        for (index, event) in events.iter().enumerate() {
            let version = index as i64 + 1;
            if version <= watermark {
                continue;
            }
            self.apply_one(stream_id, version, event).await?;
            applied += 1;
        }
        if applied > 1 {
            tracing::warn!(stream_id, applied, projector = %self.name, "projection caught up on missed events");
        }
        Ok(applied)
    }

    fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}:{stream_id}", self.name)
    }
}
