//! The board: the column collection and the task collection

use super::column::{Column, ColumnColor};
use super::ids::{ColumnId, TaskId};
use super::task::Task;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All state of one board session.
///
/// Both collections are kept in insertion order; display order comes from the
/// `order` fields. Ordering changes go through [`crate::ordering`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Board {
    /// A board with no columns
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with the standard three columns and no tasks
    pub fn with_default_columns() -> Self {
        Self {
            columns: Self::default_columns(),
            tasks: Vec::new(),
        }
    }

    /// Get the default columns for a new board
    pub fn default_columns() -> Vec<Column> {
        vec![
            Column {
                id: ColumnId::from_string("todo"),
                title: "To Do".into(),
                color: ColumnColor::Blue,
                order: 0,
            },
            Column {
                id: ColumnId::from_string("in-progress"),
                title: "In Progress".into(),
                color: ColumnColor::Amber,
                order: 1,
            },
            Column {
                id: ColumnId::from_string("done"),
                title: "Done".into(),
                color: ColumnColor::Emerald,
                order: 2,
            },
        ]
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// The first column in display order
    pub fn first_column(&self) -> Option<&Column> {
        self.columns.iter().min_by_key(|c| c.order)
    }

    /// Columns in display order
    pub fn sorted_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.order);
        columns
    }

    /// Tasks of one column in lane order
    pub fn column_tasks(&self, column: &ColumnId) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| &t.column_id == column)
            .collect();
        tasks.sort_by_key(|t| t.order);
        tasks
    }

    /// Number of tasks in a column
    pub fn task_count(&self, column: &ColumnId) -> usize {
        self.tasks.iter().filter(|t| &t.column_id == column).count()
    }

    /// Every column in display order, mapped to its tasks in lane order.
    ///
    /// This is what a renderer draws; it is a pure function of the board.
    pub fn lanes(&self) -> IndexMap<ColumnId, Vec<&Task>> {
        self.sorted_columns()
            .into_iter()
            .map(|c| (c.id.clone(), self.column_tasks(&c.id)))
            .collect()
    }

    /// Check the ordering invariants, describing the first violation found.
    ///
    /// Column orders must be exactly `0..columns`, every column's task orders
    /// exactly `0..count`, and no task may reference a missing column.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let mut column_orders: Vec<usize> = self.columns.iter().map(|c| c.order).collect();
        column_orders.sort_unstable();
        if column_orders.iter().copied().ne(0..self.columns.len()) {
            return Err(format!("column orders are {:?}", column_orders));
        }

        for task in &self.tasks {
            if self.find_column(&task.column_id).is_none() {
                return Err(format!(
                    "task {} references missing column {}",
                    task.id, task.column_id
                ));
            }
        }

        for column in &self.columns {
            let mut orders: Vec<usize> = self
                .tasks
                .iter()
                .filter(|t| t.column_id == column.id)
                .map(|t| t.order)
                .collect();
            orders.sort_unstable();
            if orders.iter().copied().ne(0..orders.len()) {
                return Err(format!(
                    "task orders in column {} are {:?}",
                    column.id, orders
                ));
            }
        }

        Ok(())
    }
}
