//! Simulated node-status records.
//!
//! # Data Flow
//! ```text
//! generator.rs (random batch of records)
//!     → state holder keeps the current batch
//!     → GET /data serializes it as a JSON array
//!
//! diff.rs (client side):
//!     previous poll + current poll → ids that are new or changed
//! ```

pub mod diff;
pub mod generator;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use diff::changed_or_new;
pub use generator::RecordGenerator;

/// Status reported for a simulated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT OK")]
    NotOk,
    #[serde(rename = "MAINTENANCE")]
    Maintenance,
}

impl NodeStatus {
    /// Every status, in the order they are sampled from.
    pub const ALL: [NodeStatus; 3] = [NodeStatus::Ok, NodeStatus::NotOk, NodeStatus::Maintenance];

    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Ok => "OK",
            NodeStatus::NotOk => "NOT OK",
            NodeStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One simulated node.
///
/// Field order is the JSON key order: `id`, `name`, `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub status: NodeStatus,
}

impl Record {
    /// Build the record at 1-based position `id`.
    pub fn new(id: u32, status: NodeStatus) -> Self {
        Self {
            id,
            name: format!("Node_{}", id),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = Record::new(3, NodeStatus::NotOk);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Node_3","status":"NOT OK"}"#);
    }

    #[test]
    fn test_status_strings() {
        let names: Vec<String> = NodeStatus::ALL
            .iter()
            .map(|s| serde_json::to_value(s).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["OK", "NOT OK", "MAINTENANCE"]);

        for status in NodeStatus::ALL {
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn test_status_parses_wire_value() {
        let status: NodeStatus = serde_json::from_str(r#""MAINTENANCE""#).unwrap();
        assert_eq!(status, NodeStatus::Maintenance);
        assert!(serde_json::from_str::<NodeStatus>(r#""Ok""#).is_err());
    }
}
