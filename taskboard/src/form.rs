//! Form submissions for creating and editing tasks and columns.
//!
//! A form's only validation rule is that its title, trimmed, is not empty.
//! A rejected submission leaves the board untouched and reports
//! [`FormOutcome::Rejected`] so the caller can keep the form open.

use crate::column::{AddColumn, UpdateColumn};
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::task::{AddTask, UpdateTask};
use crate::types::{Board, ChecklistItem, Column, ColumnColor, ColumnId, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::OperationProcessor;
use tracing::debug;

/// What happened to a submitted form
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    /// Saved; carries the stored entity
    Saved(Value),
    /// Title was blank; nothing was saved
    Rejected,
    /// The entity being edited (or its target column) no longer exists
    Stale,
}

impl FormOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Task create/edit form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Target column; `None` means the first column
    #[serde(default)]
    pub column_id: Option<ColumnId>,
}

impl TaskForm {
    /// A blank form defaulting to the board's first column
    pub fn blank(board: &Board) -> Self {
        Self {
            column_id: board.first_column().map(|c| c.id.clone()),
            ..Default::default()
        }
    }

    /// A form pre-filled from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            checklist: task.checklist.clone(),
            column_id: Some(task.column_id.clone()),
        }
    }

    /// Append an empty checklist line
    pub fn add_checklist_item(&mut self) -> &mut ChecklistItem {
        self.checklist.push(ChecklistItem::new(""));
        let last = self.checklist.len() - 1;
        &mut self.checklist[last]
    }

    /// Submit the form, creating a task or editing `editing`
    pub fn submit<P>(
        &self,
        processor: &P,
        ctx: &mut BoardContext,
        editing: Option<&TaskId>,
    ) -> Result<FormOutcome>
    where
        P: OperationProcessor<BoardContext, BoardError>,
    {
        if self.title.trim().is_empty() {
            debug!("task form rejected: blank title");
            return Ok(FormOutcome::Rejected);
        }

        match editing {
            None => {
                let mut cmd = AddTask::new(self.title.clone())
                    .with_description(self.description.clone())
                    .with_checklist(self.checklist.clone());
                cmd.due_date = self.due_date;
                cmd.column = self.column_id.clone();
                finish(processor.process(&cmd, ctx))
            }
            Some(id) => {
                let mut cmd = UpdateTask::new(id)
                    .with_title(self.title.clone())
                    .with_description(self.description.clone())
                    .with_due_date(self.due_date)
                    .with_checklist(self.checklist.clone());
                cmd.column = self.column_id.clone();
                finish(processor.process(&cmd, ctx))
            }
        }
    }
}

/// Column create/edit form payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnForm {
    pub title: String,
    #[serde(default)]
    pub color: ColumnColor,
}

impl ColumnForm {
    pub fn new(title: impl Into<String>, color: ColumnColor) -> Self {
        Self {
            title: title.into(),
            color,
        }
    }

    /// A form pre-filled from an existing column
    pub fn from_column(column: &Column) -> Self {
        Self::new(column.title.clone(), column.color)
    }

    /// Submit the form, creating a column or editing `editing`
    pub fn submit<P>(
        &self,
        processor: &P,
        ctx: &mut BoardContext,
        editing: Option<&ColumnId>,
    ) -> Result<FormOutcome>
    where
        P: OperationProcessor<BoardContext, BoardError>,
    {
        if self.title.trim().is_empty() {
            debug!("column form rejected: blank title");
            return Ok(FormOutcome::Rejected);
        }

        match editing {
            None => {
                let cmd = AddColumn::new(self.title.clone()).with_color(self.color);
                finish(processor.process(&cmd, ctx))
            }
            Some(id) => {
                let cmd = UpdateColumn::new(id)
                    .with_title(self.title.clone())
                    .with_color(self.color);
                finish(processor.process(&cmd, ctx))
            }
        }
    }
}

fn finish(result: Result<Value>) -> Result<FormOutcome> {
    match result {
        Ok(value) if value.get("changed") == Some(&Value::Bool(false)) => Ok(FormOutcome::Stale),
        Ok(value) => Ok(FormOutcome::Saved(value)),
        Err(error) if error.is_validation() => Ok(FormOutcome::Rejected),
        Err(error) => Err(error),
    }
}
