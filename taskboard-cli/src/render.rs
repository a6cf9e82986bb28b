//! Terminal-aware table rendering for boards, activity and colours.

use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::{json, Value};
use taskboard::{Board, ColumnColor, DueStatus, LogEntry, Task};

/// Create a table pre-configured for terminal-width-aware output.
///
/// Uses crossterm to detect the actual terminal width, falling back to
/// 120 columns when not connected to a TTY.
pub fn new_table() -> Table {
    let width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(120);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(width);
    table
}

/// Truncate a string to `max` characters, appending "..." if truncated.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Text for one task card
pub fn task_cell(task: &Task, today: NaiveDate) -> String {
    let mut lines = vec![task.title.clone()];

    let mut meta = Vec::new();
    let (done, total) = task.checklist_progress();
    if total > 0 {
        meta.push(format!("[{done}/{total}]"));
    }
    if let Some(due) = task.due_date {
        let flag = match task.due_status(today) {
            DueStatus::Overdue => " (overdue)",
            DueStatus::Today => " (today)",
            DueStatus::Upcoming | DueStatus::None => "",
        };
        meta.push(format!("due {due}{flag}"));
    }
    if !meta.is_empty() {
        lines.push(meta.join("  "));
    }

    lines.push(format!("#{}", task.id));
    lines.join("\n")
}

/// One table column per board column, tasks in lane order down the rows
pub fn board_table(board: &Board, today: NaiveDate) -> Table {
    let mut table = new_table();
    let lanes = board.lanes();

    if lanes.is_empty() {
        table.set_header(vec!["(no columns)"]);
        return table;
    }

    table.set_header(board.sorted_columns().iter().map(|column| {
        let count = lanes.get(&column.id).map(Vec::len).unwrap_or(0);
        Cell::new(format!("{} ({count})", column.title))
    }));

    let depth = lanes.values().map(Vec::len).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(lanes.values().map(|tasks| match tasks.get(row) {
            Some(task) => Cell::new(task_cell(task, today)),
            None => Cell::new(""),
        }));
    }
    table
}

/// Activity log, newest first
pub fn activity_table(entries: &[&LogEntry]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Operation", "Actor", "Input"]);
    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%H:%M:%S").to_string(),
            entry.op.clone(),
            entry.actor.clone().unwrap_or_else(|| "-".to_string()),
            truncate_str(&entry.input.to_string(), 60),
        ]);
    }
    table
}

/// The colour presets
pub fn colors_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Name", "Label", "Hex"]);
    for color in ColumnColor::ALL {
        table.add_row(vec![color.as_str(), color.label(), color.hex()]);
    }
    table
}

pub fn colors_json() -> Value {
    ColumnColor::ALL
        .iter()
        .map(|color| {
            json!({
                "name": color.as_str(),
                "label": color.label(),
                "hex": color.hex(),
            })
        })
        .collect()
}
