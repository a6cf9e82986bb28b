//! In-memory kanban board engine
//!
//! This crate keeps a board of ordered columns, each holding an ordered lane
//! of tasks, and exposes every change as a command struct executed through
//! an operation processor.
//!
//! ## Overview
//!
//! - **Contiguous orders** - every lane and the column list are numbered
//!   `0..n` after any change, so positions are plain indices
//! - **Atomic commands** - a command that fails validation leaves the board
//!   untouched
//! - **Stale-tolerant** - commands naming a task or column that no longer
//!   exists are no-ops that report `"changed": false`
//! - **Activity log** - successful mutations are recorded newest first,
//!   attributed to the processor's actor
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{
//!     defaults::StartBoard, task::{AddTask, MoveTask}, BoardContext,
//!     BoardOperationProcessor, OperationProcessor,
//! };
//!
//! let processor = BoardOperationProcessor::with_actor("alice");
//! let mut ctx = BoardContext::new(StartBoard::Default.build());
//!
//! let added = processor
//!     .process(&AddTask::new("Write release notes"), &mut ctx)
//!     .unwrap();
//! let id = added["id"].as_str().unwrap().to_string();
//!
//! processor
//!     .process(&MoveTask::new(id.as_str(), "done", 0), &mut ctx)
//!     .unwrap();
//! assert_eq!(ctx.board().task_count(&"done".into()), 1);
//! assert_eq!(ctx.read_activity(None).len(), 2);
//! ```
//!
//! Requests can also arrive as loose JSON; see [`parse::parse_input`].

mod command;
mod context;
pub mod defaults;
mod error;
pub mod form;
pub mod intent;
mod macros;
pub mod ordering;
mod outcome;
pub mod parse;
mod processor;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod task;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use command::BoardCommand;
pub use context::BoardContext;
pub use error::{BoardError, Result};
pub use outcome::unchanged;
pub use processor::BoardOperationProcessor;

// Re-export commonly used types
pub use types::{
    Board, ChecklistItem, ChecklistItemId, Column, ColumnColor, ColumnId, DueStatus, Task, TaskId,
};
