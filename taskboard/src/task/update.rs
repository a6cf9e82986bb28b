//! UpdateTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::ordering;
use crate::outcome::{check_checklist, clean_title, logged};
use crate::types::{ChecklistItem, ColumnId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{Execute, ExecutionResult};

/// Edit a task's fields.
///
/// The task keeps its place in its column. Changing `column` moves the task
/// to the end of the new column.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New due date
    #[serde(default, alias = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Remove the due date
    #[serde(default, alias = "clearDueDate")]
    pub clear_due_date: bool,
    /// Replacement checklist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<ChecklistItem>>,
    /// New column
    #[serde(
        default,
        alias = "column_id",
        alias = "columnId",
        skip_serializing_if = "Option::is_none"
    )]
    pub column: Option<ColumnId>,
}

operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Update a task's fields"
);

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set (`Some`) or clear (`None`) the due date
    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.clear_due_date = due_date.is_none();
        self.due_date = due_date;
        self
    }

    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = Some(checklist);
        self
    }

    pub fn with_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.column = Some(column.into());
        self
    }
}

impl Execute<BoardContext, BoardError> for UpdateTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let title = self
                .title
                .as_deref()
                .map(|t| clean_title("task", t))
                .transpose()?;
            if let Some(checklist) = &self.checklist {
                check_checklist(checklist)?;
            }

            let board = ctx.board_mut();
            let current_column = board
                .find_task(&self.id)
                .map(|t| t.column_id.clone())
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;

            // Validate the move before editing anything
            if let Some(column) = &self.column {
                if board.find_column(column).is_none() {
                    return Err(BoardError::ColumnNotFound {
                        id: column.to_string(),
                    });
                }
            }

            if let Some(task) = board.find_task_mut(&self.id) {
                if let Some(title) = title {
                    task.title = title;
                }
                if let Some(description) = &self.description {
                    task.description = description.clone();
                }
                if self.due_date.is_some() || self.clear_due_date {
                    task.due_date = self.due_date;
                }
                if let Some(checklist) = &self.checklist {
                    task.checklist = checklist.clone();
                }
            }

            if let Some(column) = self.column.as_ref().filter(|c| **c != current_column) {
                ordering::move_task(board, &self.id, column, usize::MAX)?;
            }

            let task = board
                .find_task(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;
            Ok(serde_json::to_value(task)?)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::sample_board;
    use crate::task::AddTask;

    fn setup() -> BoardContext {
        BoardContext::new(sample_board())
    }

    #[test]
    fn test_update_task_fields_keep_order() {
        let mut ctx = setup();
        AddTask::new("Second").execute(&mut ctx).into_result().unwrap();

        let result = UpdateTask::new("1")
            .with_title("  Redesign homepage ")
            .with_description("New copy")
            .with_checklist(vec![])
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Redesign homepage");
        assert_eq!(result["description"], "New copy");
        assert_eq!(result["checklist"].as_array().unwrap().len(), 0);
        assert_eq!(result["order"], 0);
        assert!(ctx.board().check_invariants().is_ok());
    }

    #[test]
    fn test_update_task_clears_due_date() {
        let mut ctx = setup();
        let result = UpdateTask::new("1")
            .with_due_date(None)
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert!(result["dueDate"].is_null());
    }

    #[test]
    fn test_update_task_column_appends_to_new_column() {
        let mut ctx = setup();

        let result = UpdateTask::new("1")
            .with_column("in-progress")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["columnId"], "in-progress");
        assert_eq!(result["order"], 1);
        assert!(ctx.board().check_invariants().is_ok());
    }

    #[test]
    fn test_update_task_blank_title_changes_nothing() {
        let mut ctx = setup();
        let before = ctx.board().clone();
        let result = UpdateTask::new("1")
            .with_title("   ")
            .with_description("ignored")
            .execute(&mut ctx);
        assert!(result.into_result().is_err());
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_update_task_stale_column_changes_nothing() {
        let mut ctx = setup();
        let before = ctx.board().clone();
        let result = UpdateTask::new("1")
            .with_title("New")
            .with_column("gone")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["changed"], false);
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_update_missing_task() {
        let mut ctx = setup();
        let result = UpdateTask::new("nope")
            .with_title("x")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["changed"], false);
    }

    #[test]
    fn test_update_task_duplicate_checklist_ids_change_nothing() {
        let mut ctx = setup();
        let before = ctx.board().clone();
        let item = ChecklistItem::new("Review");
        let result = UpdateTask::new("1")
            .with_title("Renamed")
            .with_checklist(vec![item.clone(), item])
            .execute(&mut ctx);
        assert!(!result.should_log());
        assert!(matches!(
            result.into_result(),
            Err(BoardError::DuplicateId { .. })
        ));
        assert_eq!(ctx.board(), &before);
    }
}
