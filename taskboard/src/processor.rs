//! Processor that runs board commands and keeps the activity log

use crate::context::BoardContext;
use crate::error::BoardError;
use serde_json::Value;
use taskboard_operations::{Execute, OperationProcessor};
use tracing::{debug, info, warn};

/// Runs commands against a [`BoardContext`], attributing logged operations
/// to an optional actor and appending them to the context's activity log.
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    fn process<O>(&self, operation: &O, ctx: &mut BoardContext) -> Result<Value, BoardError>
    where
        O: Execute<BoardContext, BoardError>,
    {
        let op = operation.op_string();
        let (result, log_entry) = operation.execute(ctx).split();

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            ctx.append_activity(entry);
        }

        match &result {
            Ok(value) if value.get("changed") == Some(&Value::Bool(false)) => {
                debug!(op = %op, "no change");
            }
            Ok(_) => info!(op = %op, actor = ?self.actor, "applied"),
            Err(error) if error.is_validation() => debug!(op = %op, %error, "rejected"),
            Err(error) => warn!(op = %op, %error, "failed"),
        }

        result
    }
}
