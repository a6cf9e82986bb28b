//! ToggleChecklistItem command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::macros::operation;
use crate::outcome::logged;
use crate::types::{ChecklistItemId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{Execute, ExecutionResult};

/// Flip the completed flag of one checklist item
#[derive(Debug, Deserialize, Serialize)]
pub struct ToggleChecklistItem {
    /// The task owning the checklist
    pub id: TaskId,
    /// The checklist item to toggle
    #[serde(alias = "item_id", alias = "itemId")]
    pub item: ChecklistItemId,
}

operation!(
    ToggleChecklistItem,
    verb = "toggle",
    noun = "checklist",
    description = "Toggle a checklist item on a task"
);

impl ToggleChecklistItem {
    pub fn new(id: impl Into<TaskId>, item: impl Into<ChecklistItemId>) -> Self {
        Self {
            id: id.into(),
            item: item.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for ToggleChecklistItem {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        logged(self, ctx, |ctx| {
            let task = ctx
                .board_mut()
                .find_task_mut(&self.id)
                .ok_or_else(|| BoardError::TaskNotFound {
                    id: self.id.to_string(),
                })?;
            let item = task
                .checklist_item_mut(&self.item)
                .ok_or_else(|| BoardError::not_found("checklist item", self.item.to_string()))?;

            item.completed = !item.completed;
            let completed = item.completed;
            let (done, total) = task.checklist_progress();

            Ok(json!({
                "id": self.id,
                "item": self.item,
                "completed": completed,
                "progress": { "completed": done, "total": total },
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::sample_board;

    #[test]
    fn test_toggle_checklist_item() {
        let mut ctx = BoardContext::new(sample_board());

        let result = ToggleChecklistItem::new("1", "1b")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["completed"], true);
        assert_eq!(result["progress"]["completed"], 2);

        let result = ToggleChecklistItem::new("1", "1b")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["completed"], false);
    }

    #[test]
    fn test_toggle_missing_item_is_a_no_op() {
        let mut ctx = BoardContext::new(sample_board());
        let before = ctx.board().clone();
        let result = ToggleChecklistItem::new("1", "zz")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["changed"], false);
        assert_eq!(ctx.board(), &before);
    }
}
