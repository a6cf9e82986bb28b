//! Starting boards

use crate::types::{Board, ChecklistItem, Column, ColumnId, Task};
use chrono::NaiveDate;

/// Which board a new session starts with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartBoard {
    /// Default columns plus a couple of example tasks
    #[default]
    Sample,
    /// Default columns, no tasks
    Default,
    /// Nothing at all
    Empty,
}

impl StartBoard {
    pub fn build(self) -> Board {
        match self {
            Self::Sample => sample_board(),
            Self::Default => Board::with_default_columns(),
            Self::Empty => Board::new(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn item(id: &str, text: &str, completed: bool) -> ChecklistItem {
    ChecklistItem {
        id: id.into(),
        text: text.into(),
        completed,
    }
}

fn task(id: &str, column: &str, title: &str, description: &str) -> Task {
    let mut task = Task::new(title)
        .with_id(id)
        .with_description(description);
    task.column_id = ColumnId::from(column);
    task
}

/// The default columns with two example tasks
pub fn sample_board() -> Board {
    let columns: Vec<Column> = Board::default_columns();

    let mut homepage = task(
        "1",
        "todo",
        "Design new homepage",
        "Create wireframes and mockups for the new company homepage",
    )
    .with_checklist(vec![
        item("1a", "Create wireframes", true),
        item("1b", "Design mockups", false),
        item("1c", "Get client approval", false),
    ]);
    homepage.due_date = date(2025, 1, 25);

    let mut docs = task(
        "2",
        "in-progress",
        "Update user documentation",
        "Review and update all user-facing documentation",
    )
    .with_checklist(vec![
        item("2a", "Review current docs", true),
        item("2b", "Update outdated sections", true),
    ]);
    docs.due_date = date(2025, 1, 20);

    Board {
        columns,
        tasks: vec![homepage, docs],
    }
}
