//! The `Operation` metadata trait and the `Execute` trait

use crate::ExecutionResult;
use serde_json::Value;

/// Metadata every command carries: what it does, to what
pub trait Operation {
    /// Verb, e.g. "move"
    fn verb(&self) -> &'static str;

    /// Noun, e.g. "task"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string used in activity logs, e.g. "move task"
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context.
///
/// The context is borrowed mutably for the whole call, so an operation
/// always runs to completion before the next one starts.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}
