//! Processor trait: the single entry point callers use to run operations

use crate::Execute;
use serde_json::Value;

/// Runs operations and takes care of whatever should happen to their log
/// entries (actor attribution, activity logs, tracing).
pub trait OperationProcessor<C, E> {
    /// Execute `operation` against `ctx` and return its value
    fn process<O>(&self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Execute<C, E>;
}
