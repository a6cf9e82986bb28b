//! AddTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::{check_checklist, clean_title, logged};
use crate::types::{ChecklistItem, ColumnId, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Add a new task at the end of a column
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// Task id; generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// The task title (required, trimmed)
    pub title: String,
    /// Detailed task description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[serde(default, alias = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Checklist items
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Target column; defaults to the first column
    #[serde(
        default,
        alias = "column_id",
        alias = "columnId",
        skip_serializing_if = "Option::is_none"
    )]
    pub column: Option<ColumnId>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task on the board"
);

impl AddTask {
    /// Create a new AddTask command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: None,
            due_date: None,
            checklist: Vec::new(),
            column: None,
        }
    }

    /// Use a caller-chosen id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the checklist
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    /// Set the target column
    pub fn in_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }
}

impl Execute<BoardContext, BoardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let title = clean_title("task", &self.title)?;
            check_checklist(&self.checklist)?;

            let column = match &self.column {
                Some(column) => column.clone(),
                None => ctx
                    .board()
                    .first_column()
                    .map(|c| c.id.clone())
                    .ok_or_else(|| BoardError::invalid_value("column", "board has no columns"))?,
            };

            let mut task = Task::new(title).with_checklist(self.checklist.clone());
            if let Some(id) = &self.id {
                task = task.with_id(id.clone());
            }
            task.description = self.description.clone().unwrap_or_default();
            task.due_date = self.due_date;
            let id = task.id.clone();

            ordering::insert_task(ctx.board_mut(), task, &column)?;

            let task = ctx
                .board()
                .find_task(&id)
                .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })?;
            Ok(serde_json::to_value(task)?)
        })
    }
}
