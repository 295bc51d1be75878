//! Per-student stroke record and the group container that owns it.

use crate::types::{GroupKey, StrokePoint};
use serde::{Deserialize, Serialize};

/// Accumulated stroke history for one student within one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentStrokeRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub points: Vec<StrokePoint>,
}

impl StudentStrokeRecord {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            points: Vec::new(),
        }
    }

    /// Concatenate `points` onto the history; returns the new total.
    pub(crate) fn append(&mut self, points: Vec<StrokePoint>) -> usize {
        self.points.extend(points);
        self.points.len()
    }
}

/// A group and its records, in join order. User ids are unique within it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Group {
    pub key: GroupKey,
    pub records: Vec<StudentStrokeRecord>,
}

impl Group {
    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            records: Vec::new(),
        }
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.records.iter().any(|r| r.user_id == user_id)
    }

    pub fn find_mut(&mut self, user_id: &str) -> Option<&mut StudentStrokeRecord> {
        self.records.iter_mut().find(|r| r.user_id == user_id)
    }

    /// Append an empty record unless the user is already present.
    pub fn push_unique(&mut self, user_id: &str) -> bool {
        if self.contains(user_id) {
            return false;
        }
        self.records.push(StudentStrokeRecord::new(user_id));
        true
    }

    pub fn point_count(&self) -> usize {
        self.records.iter().map(|r| r.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_with_user_id_field() {
        let mut record = StudentStrokeRecord::new("s1");
        record.append(vec![json!({"x": 1, "y": 2})]);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"userId": "s1", "points": [{"x": 1, "y": 2}]})
        );
    }

    #[test]
    fn test_push_unique_rejects_duplicates() {
        let mut group = Group::new(GroupKey::from(1u32));
        assert!(group.push_unique("s1"));
        assert!(!group.push_unique("s1"));
        assert!(group.push_unique("s2"));
        assert_eq!(group.records.len(), 2);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut record = StudentStrokeRecord::new("s1");
        assert_eq!(record.append(vec![json!(1), json!(2)]), 2);
        assert_eq!(record.append(vec![json!(2)]), 3);
        assert_eq!(record.points, vec![json!(1), json!(2), json!(2)]);
    }
}
