//! ListColumns command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::unlogged;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// List all columns in display order
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListColumns {}

operation!(
    ListColumns,
    verb = "list",
    noun = "columns",
    description = "List all columns in display order"
);

impl ListColumns {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for ListColumns {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        unlogged(ctx, |ctx| {
            let board = ctx.board();
            let columns: Vec<Value> = board
                .sorted_columns()
                .into_iter()
                .map(|c| -> Result<Value, BoardError> {
                    let mut value = serde_json::to_value(c)?;
                    value["taskCount"] = board.task_count(&c.id).into();
                    Ok(value)
                })
                .collect::<Result<_, _>>()?;

            Ok(json!({
                "count": columns.len(),
                "columns": columns,
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    #[test]
    fn test_list_columns() {
        let mut ctx = BoardContext::new(Board::with_default_columns());
        let result = ListColumns::new().execute(&mut ctx).into_result().unwrap();
        assert_eq!(result["count"], 3);
        assert_eq!(result["columns"][1]["id"], "in-progress");
        assert_eq!(result["columns"][1]["taskCount"], 0);
    }
}
