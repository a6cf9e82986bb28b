//! GetBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::unlogged;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// Get the whole board: columns in display order, each with its tasks in
/// lane order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard {}

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Get all columns with their tasks"
);

impl GetBoard {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(ctx, |ctx| {
            let board = ctx.board();
            let mut columns = Vec::with_capacity(board.columns.len());
            for (id, tasks) in board.lanes() {
                let Some(column) = board.find_column(&id) else {
                    continue;
                };
                let mut value = serde_json::to_value(column)?;
                value["tasks"] = serde_json::to_value(&tasks)?;
                columns.push(value);
            }

            Ok(json!({
                "columns": columns,
                "taskCount": board.tasks.len(),
            }))
        })
    }
}
