//! Core types for the board engine

mod board;
mod column;
mod ids;
mod task;

// Re-export all types
pub use board::Board;
pub use column::{Column, ColumnColor};
pub use ids::{ChecklistItemId, ColumnId, TaskId};
pub use task::{ChecklistItem, DueStatus, Task};
