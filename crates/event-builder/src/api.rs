use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::config::ReporterCfg;
use crate::errors::BuildResult;
use crate::identity;
use crate::model::{ActionBatch, Event, EventStatus, ExecutionResult};
use crate::payload;

/// Builds reportable events out of executed action batches.
pub trait EventBuilder: Send + Sync {
    /// Assembles one event for the batch. Fails without partial output when
    /// an attached message identifier's book contradicts the resolved event
    /// book.
    fn build_event(
        &self,
        start_time: DateTime<Utc>,
        batch: &ActionBatch,
        result: &ExecutionResult,
    ) -> BuildResult<Event>;

    /// Same as [`build_event`](Self::build_event) with the start stamped now.
    fn build_event_now(&self, batch: &ActionBatch, result: &ExecutionResult) -> BuildResult<Event> {
        self.build_event(Utc::now(), batch, result)
    }
}

/// Default assembler holding the injected reporting configuration.
///
/// Stateless beyond the configuration snapshot; safe to share across
/// concurrent callers.
pub struct DefaultEventBuilder {
    cfg: ReporterCfg,
}

impl DefaultEventBuilder {
    pub fn new(cfg: ReporterCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &ReporterCfg {
        &self.cfg
    }
}

impl EventBuilder for DefaultEventBuilder {
    fn build_event(
        &self,
        start_time: DateTime<Utc>,
        batch: &ActionBatch,
        result: &ExecutionResult,
    ) -> BuildResult<Event> {
        let identity = identity::resolve(batch.parent_event_id.as_ref(), &self.cfg);
        identity::validate_books(
            &identity,
            batch.event_name.as_deref(),
            batch.event_type.as_deref(),
            &result.attached_message_ids,
        )?;

        let status = if result.is_success() {
            EventStatus::Success
        } else {
            EventStatus::Failed
        };

        let blocks = payload::render(&batch.additional_info, result, batch.store_action_messages)?;
        let body = payload::serialize_blocks(&blocks)?;

        let event = Event {
            id: Uuid::new_v4().to_string(),
            identity,
            name: batch.event_name.clone().unwrap_or_default(),
            event_type: batch.event_type.clone(),
            parent_id: batch.parent_event_id.clone(),
            status,
            start_timestamp: start_time,
            end_timestamp: Utc::now(),
            attached_message_ids: Arc::clone(&result.attached_message_ids),
            body,
        };
        debug!(
            event_id = %event.id,
            identity = %event.identity,
            status = ?event.status,
            blocks = blocks.len(),
            "built batch event"
        );
        Ok(event)
    }
}
