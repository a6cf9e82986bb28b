//! ListTasks command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::unlogged;
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// List tasks in display order, optionally limited to one column
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListTasks {
    /// Only list tasks in this column
    #[serde(
        default,
        alias = "column_id",
        alias = "columnId",
        skip_serializing_if = "Option::is_none"
    )]
    pub column: Option<ColumnId>,
}

operation!(
    ListTasks,
    verb = "list",
    noun = "tasks",
    description = "List tasks in display order"
);

impl ListTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_column(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
        }
    }
}

impl Execute<BoardContext, BoardError> for ListTasks {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(ctx, |ctx| {
            let board = ctx.board();
            let tasks: Vec<&Task> = match &self.column {
                Some(column) => {
                    if board.find_column(column).is_none() {
                        return Err(BoardError::ColumnNotFound {
                            id: column.to_string(),
                        });
                    }
                    board.column_tasks(column)
                }
                None => board.lanes().into_values().flatten().collect(),
            };

            Ok(json!({
                "count": tasks.len(),
                "tasks": tasks,
            }))
        })
    }
}
