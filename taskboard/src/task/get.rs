//! GetTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::unlogged;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Get a task by ID
#[derive(Debug, Deserialize, Serialize)]
pub struct GetTask {
    /// The task ID to retrieve
    pub id: TaskId,
}

operation!(
    GetTask,
    verb = "get",
    noun = "task",
    description = "Get a task by ID"
);

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(ctx, |ctx| {
            let task = ctx
                .board()
                .find_task(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;

            let mut result = serde_json::to_value(task)?;
            let (completed, total) = task.checklist_progress();
            result["progress"] = serde_json::json!({ "completed": completed, "total": total });
            Ok(result)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::sample_board;

    #[test]
    fn test_get_task() {
        let mut ctx = BoardContext::new(sample_board());
        let result = GetTask::new("1").execute(&mut ctx).into_result().unwrap();
        assert_eq!(result["title"], "Design new homepage");
        assert_eq!(result["progress"]["completed"], 1);
        assert_eq!(result["progress"]["total"], 3);
    }

    #[test]
    fn test_get_missing_task() {
        let mut ctx = BoardContext::new(sample_board());
        let result = GetTask::new("missing").execute(&mut ctx).into_result();
        assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));
    }
}
