//! Turning command bodies into `ExecutionResult`s.
//!
//! Mutations referencing a stale id become unlogged no-ops, validation
//! failures become unlogged failures, and everything else is logged.

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use serde::Serialize;
use crate::types::ChecklistItem;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::time::Instant;
use taskboard_operations::{ExecutionResult, LogEntry, Operation};
use tracing::debug;

/// Value returned by a mutation that did not change the board
pub fn unchanged(reason: impl Into<String>) -> Value {
    json!({ "changed": false, "reason": reason.into() })
}

/// Run a mutating command body and log it
pub(crate) fn logged<O, F>(op: &O, ctx: &mut BoardContext, body: F) -> ExecutionResult<Value, BoardError>
where
    O: Operation + Serialize,
    F: FnOnce(&mut BoardContext) -> Result<Value>,
{
    let start = Instant::now();
    let input = serde_json::to_value(op).unwrap_or(Value::Null);
    let result = body(ctx);
    let duration_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(value) if value.get("changed") == Some(&Value::Bool(false)) => {
            ExecutionResult::Unlogged { value }
        }
        Ok(value) => ExecutionResult::Logged {
            value: value.clone(),
            log_entry: LogEntry::new(op.op_string(), input, value, None, duration_ms),
        },
        Err(error) if error.is_stale() => {
            debug!(op = %op.op_string(), %error, "stale reference, nothing to do");
            ExecutionResult::Unlogged {
                value: unchanged(error.to_string()),
            }
        }
        Err(error) if error.is_validation() => ExecutionResult::Failed {
            error,
            log_entry: None,
        },
        Err(error) => {
            let message = error.to_string();
            ExecutionResult::Failed {
                error,
                log_entry: Some(LogEntry::failure(op.op_string(), input, &message, duration_ms)),
            }
        }
    }
}

/// Run a read-only command body
pub(crate) fn unlogged<F>(ctx: &BoardContext, body: F) -> ExecutionResult<Value, BoardError>
where
    F: FnOnce(&BoardContext) -> Result<Value>,
{
    match body(ctx) {
        Ok(value) => ExecutionResult::Unlogged { value },
        Err(error) => ExecutionResult::Failed {
            error,
            log_entry: None,
        },
    }
}

/// Trim a submitted title, rejecting it when nothing is left
pub(crate) fn clean_title(entity: &str, title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardError::empty_title(entity));
    }
    Ok(trimmed.to_string())
}

/// Reject a checklist in which two items share an id
pub(crate) fn check_checklist(items: &[ChecklistItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(&item.id) {
            return Err(BoardError::duplicate_id("checklist item", item.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("task", "  Ship it \n").unwrap(), "Ship it");
        assert!(matches!(
            clean_title("task", " \t "),
            Err(BoardError::EmptyTitle { .. })
        ));
    }

    #[test]
    fn test_check_checklist() {
        let item = ChecklistItem::new("Review");
        assert!(check_checklist(&[item.clone(), ChecklistItem::new("Ship")]).is_ok());
        assert!(check_checklist(&[]).is_ok());
        assert!(matches!(
            check_checklist(&[item.clone(), item]),
            Err(BoardError::DuplicateId { .. })
        ));
    }
}
