//! Wire payloads handed to the store by the transport layer.
//!
//! Field names follow the messages the classroom clients send
//! (`groupInfo`, `groupnum`, `stuIds`, `userid`, `points`).

use crate::error::StoreError;
use crate::types::{GroupKey, StrokePoint};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One roster entry: a group and the students pre-assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRoster {
    #[serde(rename = "groupnum")]
    pub group: GroupKey,

    #[serde(rename = "stuIds", default, deserialize_with = "deserialize_student_ids")]
    pub student_ids: Vec<String>,
}

/// An explicit `null` student list means no students, same as a missing one.
fn deserialize_student_ids<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl GroupRoster {
    pub fn new<I, S>(group: impl Into<GroupKey>, student_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            group: group.into(),
            student_ids: student_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Roster message: `{"groupInfo": [{"groupnum": 1, "stuIds": ["s1"]}]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPayload {
    #[serde(rename = "groupInfo")]
    pub group_info: Vec<GroupRoster>,
}

/// Free-grouping join message: `{"userid": "s9", "groupnum": 99}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeJoin {
    pub userid: String,
    pub groupnum: GroupKey,
}

impl FreeJoin {
    pub fn from_value(value: &Value) -> Result<Self, StoreError> {
        FreeJoin::deserialize(value)
            .map_err(|e| StoreError::MalformedPayload(format!("free group join: {}", e)))
    }
}

/// Stroke batch message. Every field is optional on the wire; the store
/// ignores batches with a missing field rather than rejecting them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeBatch {
    #[serde(default)]
    pub userid: Option<String>,

    #[serde(default)]
    pub groupnum: Option<GroupKey>,

    #[serde(default)]
    pub points: Option<Vec<StrokePoint>>,
}

impl StrokeBatch {
    pub fn new(
        userid: impl Into<String>,
        groupnum: impl Into<GroupKey>,
        points: Vec<StrokePoint>,
    ) -> Self {
        Self {
            userid: Some(userid.into()),
            groupnum: Some(groupnum.into()),
            points: Some(points),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self, StoreError> {
        StrokeBatch::deserialize(value)
            .map_err(|e| StoreError::MalformedPayload(format!("stroke batch: {}", e)))
    }
}

/// Extract the `groupInfo` array from a raw roster message.
pub(crate) fn roster_entries(value: &Value) -> Result<&[Value], StoreError> {
    value
        .get("groupInfo")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| StoreError::MalformedRoster("groupInfo is not an array".to_string()))
}

/// Decode one roster entry, reporting its position on failure.
pub(crate) fn decode_roster_entry(index: usize, value: &Value) -> Result<GroupRoster, StoreError> {
    GroupRoster::deserialize(value)
        .map_err(|e| StoreError::MalformedRoster(format!("entry {}: {}", index, e)))
}
