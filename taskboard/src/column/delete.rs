//! DeleteColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::{logged, unchanged};
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// Delete a column and every task in it.
///
/// A column that still holds tasks is only deleted when `confirmed` is set;
/// an empty column needs no confirmation.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
    /// The user agreed to the prompt from [`DeleteColumn::prompt`]
    #[serde(default)]
    pub confirmed: bool,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column together with its tasks"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
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

    /// The question to ask before deleting, or `None` when the column is
    /// empty or unknown and no confirmation is needed.
    pub fn prompt(&self, board: &Board) -> Option<String> {
        let column = board.find_column(&self.id)?;
        let count = board.task_count(&self.id);
        if count == 0 {
            return None;
        }
        Some(format!(
            "Are you sure you want to delete \"{}\" column? This will also delete all {} tasks in this column.",
            column.title, count
        ))
    }
}

impl Execute<BoardContext, BoardError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            if !self.confirmed && self.prompt(ctx.board()).is_some() {
                return Ok(unchanged("deletion not confirmed"));
            }

            let (column, tasks) = ordering::delete_column(ctx.board_mut(), &self.id)?;

            Ok(json!({
                "deleted": true,
                "id": column.id,
                "tasksDeleted": tasks.len(),
            }))
        })
    }
}
