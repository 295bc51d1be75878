//! Session events and JSON-lines replay.
//!
//! A recorded session is one event per line:
//!
//! ```text
//! {"event": "initPenData", "data": {"groupInfo": [{"groupnum": 1, "stuIds": ["s1"]}]}}
//! {"event": "receivePenData", "data": {"userid": "s1", "groupnum": 1, "points": [[3, 4]]}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{ApiError, StoreError};
use crate::hub::StrokeHub;
use crate::store::{IngestOutcome, JoinOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Kinds of messages the transport layer forwards to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "initPenData")]
    InitPenData,
    #[serde(rename = "handleFreeGroup")]
    HandleFreeGroup,
    #[serde(rename = "receivePenData")]
    ReceivePenData,
}

/// One recorded event. `data` is kept raw so a malformed payload reaches the
/// store and fails there, the same way a live message would.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub event: EventKind,
    #[serde(default)]
    pub data: Value,
}

/// What applying one event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Initialized,
    Joined(JoinOutcome),
    Ingested(IngestOutcome),
}

/// Counts for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub applied: usize,
    pub ignored: usize,
    pub failed: usize,
}

/// Dispatch one event into the hub.
pub fn apply_event(hub: &StrokeHub, event: &SessionEvent) -> Result<EventOutcome, StoreError> {
    match event.event {
        EventKind::InitPenData => hub
            .initialize_from_value(&event.data)
            .map(|()| EventOutcome::Initialized),
        EventKind::HandleFreeGroup => hub.join_from_value(&event.data).map(EventOutcome::Joined),
        EventKind::ReceivePenData => hub
            .receive_from_value(&event.data)
            .map(EventOutcome::Ingested),
    }
}

/// Replay JSON-lines events from `reader` into `hub`.
///
/// Lines that do not decode, and events the store rejects, are counted as
/// failed; replay keeps going. Only read errors abort.
pub fn replay_reader<R: BufRead>(hub: &StrokeHub, reader: R) -> Result<ReplayReport, ApiError> {
    let mut report = ReplayReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let event: SessionEvent = match serde_json::from_str(trimmed) {
            Ok(event) => event,
            Err(e) => {
                warn!(line = index + 1, "Skipping undecodable session event: {}", e);
                report.failed += 1;
                continue;
            }
        };

        match apply_event(hub, &event) {
            Ok(EventOutcome::Ingested(IngestOutcome::Ignored(_))) => report.ignored += 1,
            Ok(_) => report.applied += 1,
            Err(_) => report.failed += 1,
        }
    }

    info!(
        applied = report.applied,
        ignored = report.ignored,
        failed = report.failed,
        "Session replay finished"
    );
    Ok(report)
}

/// Replay a session file into `hub`.
pub fn replay_file(hub: &StrokeHub, path: &Path) -> Result<ReplayReport, ApiError> {
    let file = File::open(path)?;
    replay_reader(hub, BufReader::new(file))
}
