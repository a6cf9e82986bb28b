//! DeleteTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::{logged, unchanged};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// Delete a task once the user has confirmed it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
    /// The user agreed to [`DeleteTask::PROMPT`]
    #[serde(default)]
    pub confirmed: bool,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task"
);

impl DeleteTask {
    /// The question to ask before deleting a task
    pub const PROMPT: &'static str = "Are you sure you want to delete this task?";

    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            confirmed: false,
        }
    }

    /// Record the user's answer to the confirmation prompt
    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }
}

impl Execute<BoardContext, BoardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            if !self.confirmed {
                return Ok(unchanged("deletion not confirmed"));
            }

            let task = ordering::delete_task(ctx.board_mut(), &self.id)?;

            Ok(json!({
                "deleted": true,
                "id": task.id,
                "column": task.column_id,
            }))
        })
    }
}
