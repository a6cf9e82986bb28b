//! GetColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::unlogged;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Get a column by ID
#[derive(Debug, Deserialize, Serialize)]
pub struct GetColumn {
    /// The column ID to retrieve
    pub id: ColumnId,
}

operation!(
    GetColumn,
    verb = "get",
    noun = "column",
    description = "Get a column by ID"
);

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(ctx, |ctx| {
            let board = ctx.board();
            let column = board
                .find_column(&self.id)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: self.id.to_string(),
                })?;

            let mut result = serde_json::to_value(column)?;
            result["taskCount"] = board.task_count(&self.id).into();
            Ok(result)
        })
    }
}
