//! MoveTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::logged;
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Move a task to a position in a column (possibly its own)
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Destination column
    #[serde(alias = "column_id", alias = "columnId", alias = "targetColumnId")]
    pub column: ColumnId,
    /// Zero-based position in the destination, counted after removing the
    /// task from its current column. `None` appends.
    #[serde(
        default,
        alias = "target_index",
        alias = "targetIndex",
        skip_serializing_if = "Option::is_none"
    )]
    pub index: Option<usize>,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to a different column or position"
);

impl MoveTask {
    /// Move to `index` in `column`
    pub fn new(id: impl Into<TaskId>, column: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            index: Some(index),
        }
    }

    /// Move to the end of `column`
    pub fn to_column(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            index: None,
        }
    }
}

impl Execute<BoardContext, BoardError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let index = self.index.unwrap_or(usize::MAX);
            ordering::move_task(ctx.board_mut(), &self.id, &self.column, index)?;

            let task = ctx
                .board()
                .find_task(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;
            Ok(serde_json::to_value(task)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;
    use crate::types::Board;

    fn setup() -> (BoardContext, String, String) {
        let mut ctx = BoardContext::new(Board::with_default_columns());
        let t1 = AddTask::new("t1").execute(&mut ctx).into_result().unwrap();
        let t2 = AddTask::new("t2").execute(&mut ctx).into_result().unwrap();
        (
            ctx,
            t1["id"].as_str().unwrap().to_string(),
            t2["id"].as_str().unwrap().to_string(),
        )
    }

    #[test]
    fn test_move_task_to_column() {
        let (mut ctx, t1, t2) = setup();

        let result = MoveTask::new(t1.as_str(), "done", 0)
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["columnId"], "done");
        assert_eq!(result["order"], 0);
        let remaining = ctx.board().find_task(&TaskId::from(t2)).unwrap();
        assert_eq!(remaining.order, 0);
    }

    #[test]
    fn test_move_task_to_end() {
        let (mut ctx, t1, _t2) = setup();
        let result = MoveTask::to_column(t1.as_str(), "todo")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["order"], 1);
    }

    #[test]
    fn test_move_task_invalid_column() {
        let (mut ctx, t1, _t2) = setup();
        let before = ctx.board().clone();

        let result = MoveTask::to_column(t1.as_str(), "nonexistent").execute(&mut ctx);

        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap()["changed"], false);
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_move_is_logged() {
        let (mut ctx, t1, _t2) = setup();
        let result = MoveTask::new(t1.as_str(), "todo", 1).execute(&mut ctx);
        assert!(result.should_log());
    }
}
