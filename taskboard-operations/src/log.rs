//! Log entry types for operation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A log entry recording an operation execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the operation occurred
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "add task", "move column")
    pub op: String,

    /// The normalized input parameters (as JSON)
    pub input: Value,

    /// The result value or error (as JSON)
    pub output: Value,

    /// Who performed the operation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    /// How long the operation took (milliseconds)
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// Create a log entry for a failed operation
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        Self::new(
            op,
            input,
            serde_json::json!({ "error": error }),
            None,
            duration_ms,
        )
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_entry_ids_are_ulids() {
        let a = LogEntry::new("add task", json!({}), json!({}), None, 0);
        let b = LogEntry::new("add task", json!({}), json!({}), None, 0);
        assert_eq!(a.id.len(), 26);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_actor_is_skipped_when_absent() {
        let entry = LogEntry::new("move task", json!({"id": "x"}), json!({}), None, 3);
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("actor").is_none());

        let entry = entry.with_actor("alice");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["actor"], "alice");
    }

    #[test]
    fn test_failure_entry_records_error() {
        let entry = LogEntry::failure("add task", json!({}), "title is empty", 1);
        assert_eq!(entry.output["error"], "title is empty");
    }
}
