//! Ordering engine: insert, move and delete with contiguous renumbering.
//!
//! Task order is scoped per column. Every mutation rebuilds the affected
//! lanes (the ordered task ids of one column), edits them as plain vectors
//! and writes `order = index` back, so each lane is always `0..count`.
//! Column order is global and handled the same way.
//!
//! All functions validate ids before mutating: when they return `Err` the
//! board is exactly as it was.

use crate::error::{BoardError, Result};
use crate::types::{Board, Column, ColumnId, Task, TaskId};
use tracing::trace;

/// Task ids of one column, in lane order
pub fn lane(board: &Board, column: &ColumnId) -> Vec<TaskId> {
    board
        .column_tasks(column)
        .into_iter()
        .map(|t| t.id.clone())
        .collect()
}

/// Column ids in display order
pub fn column_sequence(board: &Board) -> Vec<ColumnId> {
    board
        .sorted_columns()
        .into_iter()
        .map(|c| c.id.clone())
        .collect()
}

/// Write a lane back: every listed task joins `column` with `order = index`
fn apply_lane(board: &mut Board, column: &ColumnId, lane: &[TaskId]) {
    for (index, id) in lane.iter().enumerate() {
        if let Some(task) = board.find_task_mut(id) {
            task.column_id = column.clone();
            task.order = index;
        }
    }
    trace!(column = %column, len = lane.len(), "renumbered lane");
}

/// Write the column sequence back with `order = index`
fn apply_columns(board: &mut Board, sequence: &[ColumnId]) {
    for (index, id) in sequence.iter().enumerate() {
        if let Some(column) = board.find_column_mut(id) {
            column.order = index;
        }
    }
    trace!(len = sequence.len(), "renumbered columns");
}

fn require_column(board: &Board, id: &ColumnId) -> Result<()> {
    match board.find_column(id) {
        Some(_) => Ok(()),
        None => Err(BoardError::ColumnNotFound { id: id.to_string() }),
    }
}

/// Append a column at the end of the board. Returns its order.
pub fn insert_column(board: &mut Board, mut column: Column) -> Result<usize> {
    if board.find_column(&column.id).is_some() {
        return Err(BoardError::duplicate_id("column", column.id.to_string()));
    }
    let order = board.columns.len();
    column.order = order;
    board.columns.push(column);
    Ok(order)
}

/// Append a task at the end of `column`. Returns its order.
pub fn insert_task(board: &mut Board, mut task: Task, column: &ColumnId) -> Result<usize> {
    require_column(board, column)?;
    if board.find_task(&task.id).is_some() {
        return Err(BoardError::duplicate_id("task", task.id.to_string()));
    }
    let order = board.task_count(column);
    task.column_id = column.clone();
    task.order = order;
    board.tasks.push(task);
    Ok(order)
}

/// Move a task into `target` at `index`, counted after the task has been
/// taken out of its current lane. The index is clamped to the destination
/// length. Returns the index the task ended up at.
pub fn move_task(
    board: &mut Board,
    task_id: &TaskId,
    target: &ColumnId,
    index: usize,
) -> Result<usize> {
    let source = board
        .find_task(task_id)
        .map(|t| t.column_id.clone())
        .ok_or_else(|| BoardError::TaskNotFound {
            id: task_id.to_string(),
        })?;
    require_column(board, target)?;

    let mut source_lane = lane(board, &source);
    source_lane.retain(|id| id != task_id);

    let index = if &source == target {
        let index = index.min(source_lane.len());
        source_lane.insert(index, task_id.clone());
        apply_lane(board, &source, &source_lane);
        index
    } else {
        let mut target_lane = lane(board, target);
        let index = index.min(target_lane.len());
        target_lane.insert(index, task_id.clone());
        apply_lane(board, &source, &source_lane);
        apply_lane(board, target, &target_lane);
        index
    };

    Ok(index)
}

/// Move a column to `index` among all columns, clamped to the last slot.
/// Returns the index the column ended up at.
pub fn move_column(board: &mut Board, column_id: &ColumnId, index: usize) -> Result<usize> {
    require_column(board, column_id)?;

    let mut sequence = column_sequence(board);
    sequence.retain(|id| id != column_id);
    let index = index.min(sequence.len());
    sequence.insert(index, column_id.clone());
    apply_columns(board, &sequence);

    Ok(index)
}

/// Remove a task and close the gap in its former lane
pub fn delete_task(board: &mut Board, task_id: &TaskId) -> Result<Task> {
    let position = board
        .tasks
        .iter()
        .position(|t| &t.id == task_id)
        .ok_or_else(|| BoardError::TaskNotFound {
            id: task_id.to_string(),
        })?;

    let task = board.tasks.remove(position);
    let remaining = lane(board, &task.column_id);
    apply_lane(board, &task.column_id, &remaining);

    Ok(task)
}

/// Remove a column together with every task in it, then close the gap in
/// the column sequence. Tasks of other columns are untouched.
pub fn delete_column(board: &mut Board, column_id: &ColumnId) -> Result<(Column, Vec<Task>)> {
    let position = board
        .columns
        .iter()
        .position(|c| &c.id == column_id)
        .ok_or_else(|| BoardError::ColumnNotFound {
            id: column_id.to_string(),
        })?;

    let column = board.columns.remove(position);
    let (removed, kept): (Vec<Task>, Vec<Task>) = std::mem::take(&mut board.tasks)
        .into_iter()
        .partition(|t| &t.column_id == column_id);
    board.tasks = kept;

    let sequence = column_sequence(board);
    apply_columns(board, &sequence);

    Ok((column, removed))
}
