//! Grouped Stroke Store
//!
//! In-memory aggregate of stroke data for one classroom session, keyed by
//! group and then by student. Groups keep insertion order; records within a
//! group keep join order. Nothing is persisted: `reset` (and therefore every
//! `initialize`) discards all accumulated points.

mod record;

pub use record::StudentStrokeRecord;

use crate::error::StoreError;
use crate::payload::{self, GroupRoster, StrokeBatch};
use crate::types::{GroupKey, StrokePoint};
use record::Group;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Result of a free-grouping join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The group did not exist and was created with this student.
    GroupCreated,
    /// The student was appended to an existing group.
    Joined,
    /// The student was already in the group; nothing changed.
    AlreadyMember,
}

/// Why a stroke batch was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    MissingUserId,
    MissingGroup,
    MissingPoints,
    UnknownStudent,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::MissingUserId => "missing user id",
            IgnoreReason::MissingGroup => "missing group number",
            IgnoreReason::MissingPoints => "missing points",
            IgnoreReason::UnknownStudent => "no such student in group",
        };
        f.write_str(text)
    }
}

/// Result of a stroke ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    Appended { added: usize, total: usize },
    Ignored(IgnoreReason),
}

/// Per-group totals for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group: GroupKey,
    pub students: usize,
    pub points: usize,
}

/// The grouped stroke store.
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    groups: Vec<Group>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Drop every group and record.
    pub fn reset(&mut self) {
        self.groups.clear();
    }

    /// Replace the store with a roster-driven grouping.
    ///
    /// Each group gets one empty record per listed student, in roster order.
    /// A student listed twice for one group is kept once.
    pub fn initialize<I>(&mut self, rosters: I)
    where
        I: IntoIterator<Item = GroupRoster>,
    {
        self.reset();
        for roster in rosters {
            self.insert_roster(roster);
        }
    }

    /// Replace the store from a raw `{"groupInfo": [...]}` message.
    ///
    /// The store is cleared before the message is inspected. If `groupInfo`
    /// is not an array nothing is built; if an entry fails to decode, the
    /// groups built before it are kept and the rest are skipped.
    pub fn initialize_from_value(&mut self, value: &Value) -> Result<(), StoreError> {
        self.reset();
        let entries = payload::roster_entries(value)?;
        for (index, entry) in entries.iter().enumerate() {
            let roster = payload::decode_roster_entry(index, entry)?;
            self.insert_roster(roster);
        }
        Ok(())
    }

    /// Make sure `user_id` has a record in `group`, creating the group if needed.
    pub fn join_free_group(
        &mut self,
        user_id: &str,
        group: &GroupKey,
    ) -> Result<JoinOutcome, StoreError> {
        if user_id.is_empty() {
            return Err(StoreError::MalformedPayload(
                "free group join without user id".to_string(),
            ));
        }

        match self.group_mut(group) {
            Some(existing) => {
                if existing.push_unique(user_id) {
                    Ok(JoinOutcome::Joined)
                } else {
                    Ok(JoinOutcome::AlreadyMember)
                }
            }
            None => {
                let mut created = Group::new(group.clone());
                created.push_unique(user_id);
                self.groups.push(created);
                Ok(JoinOutcome::GroupCreated)
            }
        }
    }

    /// Append `points` to the record of `user_id` in `group`.
    ///
    /// Batches for students that are not in the group are dropped.
    pub fn receive_stroke_data(
        &mut self,
        user_id: &str,
        group: &GroupKey,
        points: Vec<StrokePoint>,
    ) -> IngestOutcome {
        if user_id.is_empty() {
            return IngestOutcome::Ignored(IgnoreReason::MissingUserId);
        }
        if !group.is_truthy() {
            return IngestOutcome::Ignored(IgnoreReason::MissingGroup);
        }

        let added = points.len();
        match self
            .group_mut(group)
            .and_then(|g| g.find_mut(user_id))
        {
            Some(record) => IngestOutcome::Appended {
                added,
                total: record.append(points),
            },
            None => IngestOutcome::Ignored(IgnoreReason::UnknownStudent),
        }
    }

    /// Apply a wire batch, treating absent fields as a reason to ignore it.
    pub fn receive_batch(&mut self, batch: StrokeBatch) -> IngestOutcome {
        let Some(user_id) = batch.userid else {
            return IngestOutcome::Ignored(IgnoreReason::MissingUserId);
        };
        let Some(group) = batch.groupnum else {
            return IngestOutcome::Ignored(IgnoreReason::MissingGroup);
        };
        let Some(points) = batch.points else {
            return IngestOutcome::Ignored(IgnoreReason::MissingPoints);
        };
        self.receive_stroke_data(&user_id, &group, points)
    }

    /// First record with `user_id` across all groups.
    pub fn get_by_user_id(&self, user_id: &str) -> Option<StudentStrokeRecord> {
        self.records().find(|r| r.user_id == user_id).cloned()
    }

    /// Like `get_by_user_id`, also naming the group the record was found in.
    pub fn locate_user(&self, user_id: &str) -> Option<(GroupKey, StudentStrokeRecord)> {
        self.groups.iter().find_map(|g| {
            g.records
                .iter()
                .find(|r| r.user_id == user_id)
                .map(|r| (g.key.clone(), r.clone()))
        })
    }

    /// Records of `group`; empty when the group does not exist.
    pub fn get_by_group(&self, group: &GroupKey) -> Vec<StudentStrokeRecord> {
        self.group(group)
            .map(|g| g.records.clone())
            .unwrap_or_default()
    }

    /// Every record, by group insertion order then join order.
    pub fn get_all(&self) -> Vec<StudentStrokeRecord> {
        self.records().cloned().collect()
    }

    pub fn group_keys(&self) -> Vec<GroupKey> {
        self.groups.iter().map(|g| g.key.clone()).collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn student_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn summaries(&self) -> Vec<GroupSummary> {
        self.groups
            .iter()
            .map(|g| GroupSummary {
                group: g.key.clone(),
                students: g.records.len(),
                points: g.point_count(),
            })
            .collect()
    }

    fn records(&self) -> impl Iterator<Item = &StudentStrokeRecord> + '_ {
        self.groups.iter().flat_map(|g| g.records.iter())
    }

    fn group(&self, key: &GroupKey) -> Option<&Group> {
        self.groups.iter().find(|g| &g.key == key)
    }

    fn group_mut(&mut self, key: &GroupKey) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| &g.key == key)
    }

    // A repeated group key replaces the earlier entry's records in place.
    fn insert_roster(&mut self, roster: GroupRoster) {
        let mut group = Group::new(roster.group);
        for student_id in &roster.student_ids {
            group.push_unique(student_id);
        }
        match self.group_mut(&group.key) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }
}
