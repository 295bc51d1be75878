//! Stroke Hub
//!
//! Shared handle over a [`StrokeStore`] for the transport handlers. Each call
//! runs under one coarse lock, so group creation and point appends are
//! serialized even when handlers run on several threads.
//!
//! Mutations never panic on bad input. Failures are logged here and returned
//! as a `Result` the caller may drop; losing one packet must not take the
//! aggregator down.

use crate::error::StoreError;
use crate::payload::{FreeJoin, GroupRoster, StrokeBatch};
use crate::store::{GroupSummary, IngestOutcome, JoinOutcome, StrokeStore, StudentStrokeRecord};
use crate::types::{GroupKey, StrokePoint};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Cloneable handle; all clones share one store.
#[derive(Clone, Default)]
pub struct StrokeHub {
    store: Arc<Mutex<StrokeStore>>,
}

impl StrokeHub {
    pub fn new() -> Self {
        Self::with_store(StrokeStore::new())
    }

    pub fn with_store(store: StrokeStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Discard the current session.
    pub fn reset(&self) {
        self.store.lock().reset();
        debug!("Stroke store reset");
    }

    pub fn initialize(&self, rosters: Vec<GroupRoster>) {
        let mut store = self.store.lock();
        store.initialize(rosters);
        info!(
            groups = store.group_count(),
            students = store.student_count(),
            "Groups initialized"
        );
    }

    pub fn initialize_from_value(&self, value: &Value) -> Result<(), StoreError> {
        let mut store = self.store.lock();
        match store.initialize_from_value(value) {
            Ok(()) => {
                info!(
                    groups = store.group_count(),
                    students = store.student_count(),
                    "Groups initialized"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    operation = "initialize",
                    groups = store.group_count(),
                    "Failed to initialize groups: {}",
                    e
                );
                Err(e)
            }
        }
    }

    pub fn join_free_group(&self, user_id: &str, group: &GroupKey) -> Result<JoinOutcome, StoreError> {
        let result = self.store.lock().join_free_group(user_id, group);
        match &result {
            Ok(JoinOutcome::AlreadyMember) => {
                debug!(user_id, group = %group, "Student already in group")
            }
            Ok(outcome) => debug!(user_id, group = %group, ?outcome, "Student joined group"),
            Err(e) => error!(
                operation = "join_free_group",
                group = %group,
                "Failed to join free group: {}",
                e
            ),
        }
        result
    }

    pub fn join(&self, join: &FreeJoin) -> Result<JoinOutcome, StoreError> {
        self.join_free_group(&join.userid, &join.groupnum)
    }

    pub fn join_from_value(&self, value: &Value) -> Result<JoinOutcome, StoreError> {
        match FreeJoin::from_value(value) {
            Ok(join) => self.join(&join),
            Err(e) => {
                error!(operation = "join_free_group", "Failed to join free group: {}", e);
                Err(e)
            }
        }
    }

    pub fn receive_stroke_data(
        &self,
        user_id: &str,
        group: &GroupKey,
        points: Vec<StrokePoint>,
    ) -> IngestOutcome {
        let outcome = self
            .store
            .lock()
            .receive_stroke_data(user_id, group, points);
        log_ingest(&outcome);
        outcome
    }

    pub fn receive_batch(&self, batch: StrokeBatch) -> IngestOutcome {
        let outcome = self.store.lock().receive_batch(batch);
        log_ingest(&outcome);
        outcome
    }

    pub fn receive_from_value(&self, value: &Value) -> Result<IngestOutcome, StoreError> {
        match StrokeBatch::from_value(value) {
            Ok(batch) => Ok(self.receive_batch(batch)),
            Err(e) => {
                info!(operation = "receive_stroke_data", "Failed to receive stroke data: {}", e);
                Err(e)
            }
        }
    }

    pub fn get_by_user_id(&self, user_id: &str) -> Option<StudentStrokeRecord> {
        self.store.lock().get_by_user_id(user_id)
    }

    pub fn get_by_group(&self, group: &GroupKey) -> Vec<StudentStrokeRecord> {
        self.store.lock().get_by_group(group)
    }

    pub fn get_all(&self) -> Vec<StudentStrokeRecord> {
        self.store.lock().get_all()
    }

    pub fn summaries(&self) -> Vec<GroupSummary> {
        self.store.lock().summaries()
    }

    /// Point-in-time copy of the whole store.
    pub fn snapshot(&self) -> StrokeStore {
        self.store.lock().clone()
    }
}

fn log_ingest(outcome: &IngestOutcome) {
    match outcome {
        IngestOutcome::Appended { added, total } => {
            debug!(added, total, "Stroke points appended")
        }
        IngestOutcome::Ignored(reason) => debug!(%reason, "Stroke batch ignored"),
    }
}
