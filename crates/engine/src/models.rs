//! Records emitted by a batch run.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One output record per processed input item.
///
/// Serialises to either `{"data": ...}` or `{"error": "...", "itemIndex": n}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutputRecord {
    /// The node's payload, passed through unchanged.
    Data { data: Value },
    /// The item failed and the batch was allowed to continue.
    Error {
        error: String,
        #[serde(rename = "itemIndex")]
        item_index: usize,
    },
}

impl OutputRecord {
    pub fn is_error(&self) -> bool {
        matches!(self, OutputRecord::Error { .. })
    }
}

/// The result of running a full batch.
#[derive(Debug)]
pub struct ExecutionResult {
    pub execution_id: Uuid,
    /// Records in input order.
    pub records: Vec<OutputRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_serialize_to_host_shape() {
        let ok = OutputRecord::Data { data: json!({ "joke": "..." }) };
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({ "data": { "joke": "..." } }));

        let failed = OutputRecord::Error { error: "boom".into(), item_index: 1 };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "error": "boom", "itemIndex": 1 })
        );
    }

    #[test]
    fn error_record_round_trips_from_json() {
        let rec: OutputRecord = serde_json::from_value(json!({ "error": "x", "itemIndex": 4 })).unwrap();
        assert_eq!(rec, OutputRecord::Error { error: "x".into(), item_index: 4 });
        assert!(rec.is_error());
    }
}
