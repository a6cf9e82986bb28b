//! BoardContext - state access primitives for one board session
//!
//! The context owns the board and its activity log. No business logic
//! methods, just data access. Commands do all the work.

use crate::types::Board;
use std::collections::VecDeque;
use taskboard_operations::LogEntry;

/// Oldest entries are dropped once the log holds this many
pub const ACTIVITY_CAPACITY: usize = 1000;

/// Context passed to every command - provides access, not logic
#[derive(Debug, Default)]
pub struct BoardContext {
    board: Board,
    /// Newest first, at most `ACTIVITY_CAPACITY` entries
    activity: VecDeque<LogEntry>,
}

impl BoardContext {
    /// Create a context around an existing board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            activity: VecDeque::new(),
        }
    }

    /// A context with no columns at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take the board out, ending the session
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Record an operation in the activity log
    pub fn append_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(ACTIVITY_CAPACITY);
    }

    /// Read the activity log, newest first, optionally limited
    pub fn read_activity(&self, limit: Option<usize>) -> Vec<&LogEntry> {
        let limit = limit.unwrap_or(self.activity.len());
        self.activity.iter().take(limit).collect()
    }
}
