//! BoardCommand - one parsed request, ready to run

use crate::board::GetBoard;
use crate::column::{AddColumn, DeleteColumn, GetColumn, ListColumns, MoveColumn, UpdateColumn};
use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::intent::MoveIntent;
use crate::task::{
    AddTask, DeleteTask, GetTask, ListTasks, MoveTask, ToggleChecklistItem, UpdateTask,
};
use crate::types::Board;
use serde_json::Value;
use taskboard_operations::{Operation, OperationProcessor};

/// Every request the board understands
#[derive(Debug)]
pub enum BoardCommand {
    GetBoard(GetBoard),
    AddColumn(AddColumn),
    UpdateColumn(UpdateColumn),
    MoveColumn(MoveColumn),
    DeleteColumn(DeleteColumn),
    GetColumn(GetColumn),
    ListColumns(ListColumns),
    AddTask(AddTask),
    UpdateTask(UpdateTask),
    MoveTask(MoveTask),
    DeleteTask(DeleteTask),
    GetTask(GetTask),
    ListTasks(ListTasks),
    ToggleChecklistItem(ToggleChecklistItem),
    /// A drag-and-drop gesture, resolved against the board when run
    Drop(MoveIntent),
}

/// Apply `$body` to the inner command of every variant except `Drop`
macro_rules! each_operation {
    ($self:expr, $cmd:ident => $body:expr, drop($intent:ident) => $drop:expr) => {
        match $self {
            BoardCommand::GetBoard($cmd) => $body,
            BoardCommand::AddColumn($cmd) => $body,
            BoardCommand::UpdateColumn($cmd) => $body,
            BoardCommand::MoveColumn($cmd) => $body,
            BoardCommand::DeleteColumn($cmd) => $body,
            BoardCommand::GetColumn($cmd) => $body,
            BoardCommand::ListColumns($cmd) => $body,
            BoardCommand::AddTask($cmd) => $body,
            BoardCommand::UpdateTask($cmd) => $body,
            BoardCommand::MoveTask($cmd) => $body,
            BoardCommand::DeleteTask($cmd) => $body,
            BoardCommand::GetTask($cmd) => $body,
            BoardCommand::ListTasks($cmd) => $body,
            BoardCommand::ToggleChecklistItem($cmd) => $body,
            BoardCommand::Drop($intent) => $drop,
        }
    };
}

impl BoardCommand {
    /// "verb noun", or "drop" for a move intent
    pub fn op_string(&self) -> String {
        each_operation!(self, cmd => cmd.op_string(), drop(_intent) => "drop".to_string())
    }

    /// Whether running this command may change the board
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            BoardCommand::GetBoard(_)
                | BoardCommand::GetColumn(_)
                | BoardCommand::ListColumns(_)
                | BoardCommand::GetTask(_)
                | BoardCommand::ListTasks(_)
        )
    }

    /// The question the user must answer before this command may run,
    /// or `None` when it needs no confirmation.
    pub fn confirmation_prompt(&self, board: &Board) -> Option<String> {
        match self {
            BoardCommand::DeleteColumn(cmd) if !cmd.confirmed => cmd.prompt(board),
            BoardCommand::DeleteTask(cmd) if !cmd.confirmed => board
                .find_task(&cmd.id)
                .map(|_| DeleteTask::PROMPT.to_string()),
            _ => None,
        }
    }

    /// Record the user's answer to [`BoardCommand::confirmation_prompt`]
    pub fn set_confirmed(&mut self, confirmed: bool) {
        match self {
            BoardCommand::DeleteColumn(cmd) => cmd.confirmed = confirmed,
            BoardCommand::DeleteTask(cmd) => cmd.confirmed = confirmed,
            _ => {}
        }
    }

    /// Run through `processor` against `ctx`
    pub fn process<P>(&self, processor: &P, ctx: &mut BoardContext) -> Result<Value>
    where
        P: OperationProcessor<BoardContext, BoardError>,
    {
        each_operation!(
            self,
            cmd => processor.process(cmd, ctx),
            drop(intent) => intent.apply(processor, ctx)
        )
    }
}

macro_rules! from_command {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for BoardCommand {
                fn from(cmd: $variant) -> Self {
                    BoardCommand::$variant(cmd)
                }
            }
        )*
    };
}

from_command!(
    GetBoard,
    AddColumn,
    UpdateColumn,
    MoveColumn,
    DeleteColumn,
    GetColumn,
    ListColumns,
    AddTask,
    UpdateTask,
    MoveTask,
    DeleteTask,
    GetTask,
    ListTasks,
    ToggleChecklistItem,
);

impl From<MoveIntent> for BoardCommand {
    fn from(intent: MoveIntent) -> Self {
        BoardCommand::Drop(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::sample_board;
    use crate::intent::DropTarget;
    use crate::processor::BoardOperationProcessor;

    #[test]
    fn test_op_strings() {
        assert_eq!(BoardCommand::from(GetBoard {}).op_string(), "get board");
        assert_eq!(
            BoardCommand::from(MoveTask::to_column("1", "done")).op_string(),
            "move task"
        );
        assert_eq!(
            BoardCommand::from(MoveIntent::task("1", DropTarget::Index(0))).op_string(),
            "drop"
        );
    }

    #[test]
    fn test_mutations() {
        assert!(!BoardCommand::from(ListTasks::new()).is_mutation());
        assert!(BoardCommand::from(AddTask::new("x")).is_mutation());
        assert!(BoardCommand::from(MoveIntent::column("todo", DropTarget::Index(2))).is_mutation());
    }

    #[test]
    fn test_confirmation_prompts() {
        let board = sample_board();

        let cmd = BoardCommand::from(DeleteColumn::new("todo"));
        let prompt = cmd.confirmation_prompt(&board).unwrap();
        assert!(prompt.contains("\"To Do\""));
        assert!(prompt.contains("all 1 tasks"));

        assert_eq!(
            BoardCommand::from(DeleteColumn::new("done")).confirmation_prompt(&board),
            None
        );
        assert_eq!(
            BoardCommand::from(DeleteTask::new("1")).confirmation_prompt(&board),
            Some(DeleteTask::PROMPT.to_string())
        );
        assert_eq!(
            BoardCommand::from(DeleteTask::new("missing")).confirmation_prompt(&board),
            None
        );

        let mut cmd = BoardCommand::from(DeleteTask::new("1"));
        cmd.set_confirmed(true);
        assert_eq!(cmd.confirmation_prompt(&board), None);
    }

    #[test]
    fn test_process_confirmed_delete() {
        let processor = BoardOperationProcessor::new();
        let mut ctx = BoardContext::new(sample_board());

        let mut cmd = BoardCommand::from(DeleteColumn::new("todo"));
        let value = cmd.process(&processor, &mut ctx).unwrap();
        assert_eq!(value["changed"], false);
        assert_eq!(ctx.board().columns.len(), 3);

        cmd.set_confirmed(true);
        let value = cmd.process(&processor, &mut ctx).unwrap();
        assert_eq!(value["tasksDeleted"], 1);
        assert_eq!(ctx.board().columns.len(), 2);
        assert_eq!(ctx.read_activity(None).len(), 1);
    }
}
