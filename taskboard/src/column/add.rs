//! AddColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::{clean_title, logged};
use crate::types::{Column, ColumnColor, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Add a new column at the end of the board
#[derive(Debug, Deserialize, Serialize)]
pub struct AddColumn {
    /// Column id; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ColumnId>,
    /// The column display name
    pub title: String,
    /// Colour preset
    #[serde(default)]
    pub color: ColumnColor,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            color: ColumnColor::default(),
        }
    }

    /// Use a caller-chosen id (slug)
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the colour
    pub fn with_color(mut self, color: ColumnColor) -> Self {
        self.color = color;
        self
    }
}

impl Execute<BoardContext, BoardError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let title = clean_title("column", &self.title)?;
            let id = self.id.clone().unwrap_or_default();
            let column = Column::with_id(id.clone(), title, self.color);

            ordering::insert_column(ctx.board_mut(), column)?;

            let column = ctx
                .board()
                .find_column(&id)
                .ok_or_else(|| BoardError::ColumnNotFound { id: id.to_string() })?;
            Ok(serde_json::to_value(column)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Board;

    fn setup() -> BoardContext {
        BoardContext::new(Board::with_default_columns())
    }

    #[test]
    fn test_add_column() {
        let mut ctx = setup();

        let result = AddColumn::new("Blocked")
            .with_color(ColumnColor::Rose)
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Blocked");
        assert_eq!(result["color"], "rose");
        assert_eq!(result["order"], 3);
        assert_eq!(result["id"].as_str().unwrap().len(), 26);
    }

    #[test]
    fn test_add_column_trims_title() {
        let mut ctx = setup();
        let result = AddColumn::new("  Review ")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["title"], "Review");
    }

    #[test]
    fn test_add_column_empty_title() {
        let mut ctx = setup();
        let result = AddColumn::new("   ").execute(&mut ctx);
        assert!(!result.should_log());
        assert!(matches!(
            result.into_result(),
            Err(BoardError::EmptyTitle { .. })
        ));
        assert_eq!(ctx.board().columns.len(), 3);
    }

    #[test]
    fn test_add_column_duplicate() {
        let mut ctx = setup();
        let result = AddColumn::new("Duplicate")
            .with_id("todo")
            .execute(&mut ctx)
            .into_result();
        assert!(matches!(result, Err(BoardError::DuplicateId { .. })));
    }
}
