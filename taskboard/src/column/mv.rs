//! MoveColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::logged;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// Move a column to a new position
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveColumn {
    /// The column ID to move
    pub id: ColumnId,
    /// Zero-based target position, counted after removing the column
    #[serde(alias = "target_index", alias = "targetIndex")]
    pub index: usize,
}

operation!(
    MoveColumn,
    verb = "move",
    noun = "column",
    description = "Move a column to a different position"
);

impl MoveColumn {
    pub fn new(id: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            id: id.into(),
            index,
        }
    }
}

impl Execute<BoardContext, BoardError> for MoveColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let index = ordering::move_column(ctx.board_mut(), &self.id, self.index)?;
            let order: Vec<String> = ordering::column_sequence(ctx.board())
                .into_iter()
                .map(|id| id.to_string())
                .collect();

            Ok(json!({
                "id": self.id,
                "order": index,
                "columns": order,
            }))
        })
    }
}
