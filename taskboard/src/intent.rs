//! Move intents: the resolved outcome of a drag gesture.
//!
//! The host UI reports which entity was dragged and what it was dropped on;
//! [`MoveIntent::resolve`] turns that into a `MoveTask` or `MoveColumn`
//! command. Nothing here knows about pointers or sensors.

use crate::column::MoveColumn;
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::outcome::unchanged;
use crate::task::MoveTask;
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::OperationProcessor;
use tracing::debug;

/// What kind of entity was dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Task,
    Column,
}

/// Where the entity was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DropTarget {
    /// An explicit position (within `container` for tasks)
    Index(usize),
    /// Dropped onto another task or column
    Id(String),
}

/// A finished drag: `active_id` of `kind` was dropped on `over`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub kind: EntityKind,
    #[serde(alias = "activeId")]
    pub active_id: String,
    pub over: DropTarget,
    /// Destination column for an index drop of a task
    #[serde(default, alias = "containerId", skip_serializing_if = "Option::is_none")]
    pub container: Option<ColumnId>,
}

/// The command a move intent resolves to
#[derive(Debug)]
pub enum ResolvedMove {
    Task(MoveTask),
    Column(MoveColumn),
}

impl MoveIntent {
    /// A task was dropped on `over`
    pub fn task(active: impl Into<String>, over: DropTarget) -> Self {
        Self {
            kind: EntityKind::Task,
            active_id: active.into(),
            over,
            container: None,
        }
    }

    /// A column was dropped on `over`
    pub fn column(active: impl Into<String>, over: DropTarget) -> Self {
        Self {
            kind: EntityKind::Column,
            active_id: active.into(),
            over,
            container: None,
        }
    }

    /// Set the destination column for index drops
    pub fn in_container(mut self, column: impl Into<ColumnId>) -> Self {
        self.container = Some(column.into());
        self
    }

    /// Work out which move this drop means on `board`.
    ///
    /// Returns `None` when the drop changes nothing or references ids that
    /// no longer exist.
    pub fn resolve(&self, board: &Board) -> Option<ResolvedMove> {
        if matches!(&self.over, DropTarget::Id(over) if over == &self.active_id) {
            return None;
        }
        match self.kind {
            EntityKind::Task => self.resolve_task(board).map(ResolvedMove::Task),
            EntityKind::Column => self.resolve_column(board).map(ResolvedMove::Column),
        }
    }

    fn resolve_task(&self, board: &Board) -> Option<MoveTask> {
        let task = board.find_task(&TaskId::from(self.active_id.as_str()))?;

        match &self.over {
            DropTarget::Index(index) => {
                let column = self.container.as_ref().unwrap_or(&task.column_id);
                board.find_column(column)?;
                Some(MoveTask::new(task.id.clone(), column.clone(), *index))
            }
            DropTarget::Id(over) => {
                if let Some(over_task) = board.find_task(&TaskId::from(over.as_str())) {
                    return Some(MoveTask::new(
                        task.id.clone(),
                        over_task.column_id.clone(),
                        over_task.order,
                    ));
                }
                let column = board.find_column(&ColumnId::from(over.as_str()))?;
                Some(MoveTask::to_column(task.id.clone(), column.id.clone()))
            }
        }
    }

    fn resolve_column(&self, board: &Board) -> Option<MoveColumn> {
        let column = board.find_column(&ColumnId::from(self.active_id.as_str()))?;

        let index = match &self.over {
            DropTarget::Index(index) => *index,
            DropTarget::Id(over) => match board.find_column(&ColumnId::from(over.as_str())) {
                Some(over_column) => over_column.order,
                None => {
                    let over_task = board.find_task(&TaskId::from(over.as_str()))?;
                    board.find_column(&over_task.column_id)?.order
                }
            },
        };

        Some(MoveColumn::new(column.id.clone(), index))
    }

    /// Resolve against the context's board and run the resulting move
    pub fn apply<P>(&self, processor: &P, ctx: &mut BoardContext) -> Result<Value>
    where
        P: OperationProcessor<BoardContext, BoardError>,
    {
        match self.resolve(ctx.board()) {
            Some(ResolvedMove::Task(cmd)) => processor.process(&cmd, ctx),
            Some(ResolvedMove::Column(cmd)) => processor.process(&cmd, ctx),
            None => {
                debug!(active = %self.active_id, over = ?self.over, "drop resolves to nothing");
                Ok(unchanged("drop does not move anything"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering;
    use crate::processor::BoardOperationProcessor;
    use crate::types::{Column, ColumnColor, Task};

    /// Columns a, b, c; a holds t0, t1, t2; b holds u0
    fn board() -> Board {
        let mut board = Board::new();
        for id in ["a", "b", "c"] {
            ordering::insert_column(&mut board, Column::with_id(id, id, ColumnColor::Blue)).unwrap();
        }
        for (id, column) in [("t0", "a"), ("t1", "a"), ("t2", "a"), ("u0", "b")] {
            ordering::insert_task(&mut board, Task::new(id).with_id(id), &ColumnId::from(column))
                .unwrap();
        }
        board
    }

    fn lane(board: &Board, column: &str) -> Vec<String> {
        ordering::lane(board, &ColumnId::from(column))
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    fn release(board: &mut Board, intent: MoveIntent) -> Value {
        let processor = BoardOperationProcessor::new();
        let mut ctx = BoardContext::new(std::mem::take(board));
        let value = intent.apply(&processor, &mut ctx).unwrap();
        *board = ctx.into_board();
        value
    }

    #[test]
    fn test_task_onto_task_in_same_column_moving_down() {
        let mut board = board();
        release(&mut board, MoveIntent::task("t0", DropTarget::Id("t2".into())));
        assert_eq!(lane(&board, "a"), vec!["t1", "t2", "t0"]);
    }

    #[test]
    fn test_task_onto_task_in_same_column_moving_up() {
        let mut board = board();
        release(&mut board, MoveIntent::task("t2", DropTarget::Id("t0".into())));
        assert_eq!(lane(&board, "a"), vec!["t2", "t0", "t1"]);
    }

    #[test]
    fn test_task_onto_task_in_other_column() {
        let mut board = board();
        release(&mut board, MoveIntent::task("t1", DropTarget::Id("u0".into())));
        assert_eq!(lane(&board, "a"), vec!["t0", "t2"]);
        assert_eq!(lane(&board, "b"), vec!["t1", "u0"]);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_task_onto_column_appends() {
        let mut board = board();
        release(&mut board, MoveIntent::task("t0", DropTarget::Id("b".into())));
        assert_eq!(lane(&board, "b"), vec!["u0", "t0"]);

        release(&mut board, MoveIntent::task("t1", DropTarget::Id("c".into())));
        assert_eq!(lane(&board, "c"), vec!["t1"]);
        assert_eq!(lane(&board, "a"), vec!["t2"]);
    }

    #[test]
    fn test_task_onto_index_in_container() {
        let mut board = board();
        release(
            &mut board,
            MoveIntent::task("u0", DropTarget::Index(1)).in_container("a"),
        );
        assert_eq!(lane(&board, "a"), vec!["t0", "u0", "t1", "t2"]);
        assert!(lane(&board, "b").is_empty());
    }

    #[test]
    fn test_task_index_without_container_reorders_in_place() {
        let mut board = board();
        release(&mut board, MoveIntent::task("t2", DropTarget::Index(0)));
        assert_eq!(lane(&board, "a"), vec!["t2", "t0", "t1"]);
    }

    #[test]
    fn test_column_onto_column() {
        let mut board = board();
        release(&mut board, MoveIntent::column("c", DropTarget::Id("a".into())));
        let order: Vec<String> = ordering::column_sequence(&board)
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_column_onto_task_uses_its_column() {
        let mut board = board();
        release(&mut board, MoveIntent::column("a", DropTarget::Id("u0".into())));
        let order: Vec<String> = ordering::column_sequence(&board)
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_drop_on_self_or_unknown_is_a_no_op() {
        let mut board = board();
        let before = board.clone();

        for intent in [
            MoveIntent::task("t0", DropTarget::Id("t0".into())),
            MoveIntent::task("ghost", DropTarget::Id("t1".into())),
            MoveIntent::task("t0", DropTarget::Id("nowhere".into())),
            MoveIntent::task("t0", DropTarget::Index(0)).in_container("gone"),
            MoveIntent::column("ghost", DropTarget::Index(0)),
            MoveIntent::column("a", DropTarget::Id("a".into())),
        ] {
            let value = release(&mut board, intent);
            assert_eq!(value["changed"], false);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_intent_from_json() {
        let intent: MoveIntent = serde_json::from_str(
            r#"{"kind": "task", "activeId": "t0", "over": 2, "containerId": "b"}"#,
        )
        .unwrap();
        assert_eq!(intent.over, DropTarget::Index(2));
        assert_eq!(intent.container, Some(ColumnId::from("b")));

        let intent: MoveIntent =
            serde_json::from_str(r#"{"kind": "column", "active_id": "a", "over": "c"}"#).unwrap();
        assert_eq!(intent.over, DropTarget::Id("c".into()));
    }
}
