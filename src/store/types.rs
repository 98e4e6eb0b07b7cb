use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the simulated system's fixed-size state collection.
///
/// `id` and `name` are assigned at initialization and never change
/// afterwards; `value` and `time` are rewritten together by updates.
/// Field order doubles as JSON key order (id, name, value, time).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeRecord {
    pub id: usize,
    pub name: String,
    pub value: i32,
    pub time: DateTime<Utc>,
}
