//! # Taskboard Operations
//!
//! This crate provides the `Operation` trait for defining board commands.
//! Commands are structs where the fields ARE the parameters, and the context
//! they run against is owned by the caller for the duration of one call.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[derive(Debug, Deserialize)]
//! pub struct AddTask {
//!     /// The task title
//!     pub title: String,
//! }
//!
//! impl Operation for AddTask {
//!     fn verb(&self) -> &'static str { "add" }
//!     fn noun(&self) -> &'static str { "task" }
//!     fn description(&self) -> &'static str { "Create a new task" }
//! }
//!
//! impl Execute<BoardContext, BoardError> for AddTask {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // implementation returns ExecutionResult::Logged or Unlogged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
