use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage key for the persisted history list.
pub const HISTORY_KEY: &str = "gyanguru_history";

/// One recorded generation.
///
/// Persisted shape is `{"type": ..., "data": ..., "timestamp": ...}` with an
/// ISO-8601 timestamp. Entries are immutable once written; the list itself
/// mutates only by prepend-and-truncate in [`super::HistoryLog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Free-form category tag ("text", "code", "audio")
    #[serde(rename = "type")]
    pub kind: String,
    /// Arbitrary serializable payload; lessons store topic and level here
    #[serde(rename = "data")]
    pub payload: Value,
    #[serde(rename = "timestamp")]
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(kind: &str, payload: Value) -> Self {
        Self {
            kind: kind.to_string(),
            payload,
            recorded_at: Utc::now(),
        }
    }

    /// The topic recorded in the payload, when present.
    pub fn topic(&self) -> Option<&str> {
        self.payload.get("topic").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let entry = HistoryEntry::new("text", json!({"topic": "backprop"}));
        let encoded = serde_json::to_value(&entry).unwrap();

        assert_eq!(encoded["type"], "text");
        assert_eq!(encoded["data"]["topic"], "backprop");
        assert!(encoded["timestamp"].is_string());
        assert!(encoded.get("kind").is_none());
    }

    #[test]
    fn test_timestamp_is_iso8601() {
        let entry = HistoryEntry::new("code", json!({}));
        let encoded = serde_json::to_string(&entry).unwrap();
        let decoded: HistoryEntry = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.recorded_at, entry.recorded_at);
    }

    #[test]
    fn test_topic_accessor() {
        let entry = HistoryEntry::new("text", json!({"topic": "k-means", "depth": "brief"}));
        assert_eq!(entry.topic(), Some("k-means"));

        let no_topic = HistoryEntry::new("text", json!({"n": 3}));
        assert!(no_topic.topic().is_none());
    }
}
