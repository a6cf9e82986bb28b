//! UpdateColumn command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::{clean_title, logged};
use crate::types::{ColumnColor, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Edit a column's title or colour. Order is never touched here.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateColumn {
    /// The column ID to update
    pub id: ColumnId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColumnColor>,
}

operation!(
    UpdateColumn,
    verb = "update",
    noun = "column",
    description = "Update a column's title or colour"
);

impl UpdateColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: ColumnColor) -> Self {
        self.color = Some(color);
        self
    }
}

impl Execute<BoardContext, BoardError> for UpdateColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let title = self
                .title
                .as_deref()
                .map(|t| clean_title("column", t))
                .transpose()?;

            let column = ctx
                .board_mut()
                .find_column_mut(&self.id)
                .ok_or_else(|| BoardError::ColumnNotFound {
                    id: self.id.to_string(),
                })?;

            if let Some(title) = title {
                column.title = title;
            }
            if let Some(color) = self.color {
                column.color = color;
            }

            Ok(serde_json::to_value(&*column)?)
        })
    }
}
