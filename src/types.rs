//! Shared identifier and payload types.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque unit of handwriting-capture data. Never inspected, only appended.
pub type StrokePoint = serde_json::Value;

/// Identifier of a classroom group.
///
/// Numeric and string spellings address the same group: `1`, `1.0` and `"1"`
/// all canonicalize to the key `"1"`. A key built from the number zero is
/// remembered as such, since only the number (not the string `"0"`) counts as
/// a missing group number on ingestion. Equality and ordering ignore that.
#[derive(Debug, Clone)]
pub struct GroupKey {
    key: String,
    numeric_zero: bool,
}

impl GroupKey {
    pub fn new(key: impl Into<String>) -> Self {
        GroupKey {
            key: key.into(),
            numeric_zero: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// False for the empty key and for group number zero.
    pub fn is_truthy(&self) -> bool {
        !self.key.is_empty() && !self.numeric_zero
    }

    /// Build a key from a JSON scalar. Returns `None` for non-scalar values.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Some(GroupKey::new(s.as_str())),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(GroupKey::from(i))
                } else if let Some(u) = n.as_u64() {
                    Some(GroupKey::new(u.to_string()))
                } else {
                    n.as_f64().map(GroupKey::from_f64)
                }
            }
            _ => None,
        }
    }

    fn from_f64(f: f64) -> Self {
        if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            GroupKey::from(f as i64)
        } else {
            GroupKey::new(f.to_string())
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Serialize for GroupKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.key)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        GroupKey::new(s)
    }
}

impl From<String> for GroupKey {
    fn from(s: String) -> Self {
        GroupKey::new(s)
    }
}

impl From<u32> for GroupKey {
    fn from(n: u32) -> Self {
        GroupKey::from(i64::from(n))
    }
}

impl From<i64> for GroupKey {
    fn from(n: i64) -> Self {
        GroupKey {
            key: n.to_string(),
            numeric_zero: n == 0,
        }
    }
}

impl<'de> Deserialize<'de> for GroupKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupKeyVisitor;

        impl<'de> Visitor<'de> for GroupKeyVisitor {
            type Value = GroupKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a group number or string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<GroupKey, E> {
                Ok(GroupKey::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<GroupKey, E> {
                Ok(GroupKey::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<GroupKey, E> {
                Ok(i64::try_from(v)
                    .map(GroupKey::from)
                    .unwrap_or_else(|_| GroupKey::new(v.to_string())))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<GroupKey, E> {
                Ok(GroupKey::from_f64(v))
            }
        }

        deserializer.deserialize_any(GroupKeyVisitor)
    }
}
