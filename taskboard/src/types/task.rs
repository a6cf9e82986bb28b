//! Task types: Task, ChecklistItem

use super::ids::{ChecklistItemId, ColumnId, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task/card on the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// The column this task lives in
    pub column_id: ColumnId,
    /// Position within its column, contiguous from zero per column
    pub order: usize,
}

impl Task {
    /// Create a new task. Column and order are assigned on insertion.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            due_date: None,
            checklist: Vec::new(),
            column_id: ColumnId::from_string(""),
            order: 0,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the checklist
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    /// Checklist progress as (completed, total)
    pub fn checklist_progress(&self) -> (usize, usize) {
        let completed = self.checklist.iter().filter(|i| i.completed).count();
        (completed, self.checklist.len())
    }

    /// How the due date relates to `today`
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        match self.due_date {
            None => DueStatus::None,
            Some(due) if due == today => DueStatus::Today,
            Some(due) if due < today => DueStatus::Overdue,
            Some(_) => DueStatus::Upcoming,
        }
    }

    /// Find a checklist item by id
    pub fn checklist_item_mut(&mut self, id: &ChecklistItemId) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|i| &i.id == id)
    }
}

/// One line of a task's checklist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    #[serde(default)]
    pub id: ChecklistItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    /// Create an unchecked item with a fresh id
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ChecklistItemId::new(),
            text: text.into(),
            completed: false,
        }
    }

    /// Mark as completed
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Due date classification used for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    /// No due date
    None,
    Upcoming,
    Today,
    Overdue,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_checklist_progress() {
        let task = Task::new("Design new homepage").with_checklist(vec![
            ChecklistItem::new("Create wireframes").completed(),
            ChecklistItem::new("Design mockups"),
            ChecklistItem::new("Get client approval"),
        ]);
        assert_eq!(task.checklist_progress(), (1, 3));
        assert_eq!(Task::new("empty").checklist_progress(), (0, 0));
    }

    #[test]
    fn test_due_status() {
        let today = date("2025-01-20");
        let task = Task::new("Docs");
        assert_eq!(task.due_status(today), DueStatus::None);
        assert_eq!(
            task.clone().with_due_date(today).due_status(today),
            DueStatus::Today
        );
        assert_eq!(
            task.clone().with_due_date(date("2025-01-19")).due_status(today),
            DueStatus::Overdue
        );
        assert_eq!(
            task.with_due_date(date("2025-01-25")).due_status(today),
            DueStatus::Upcoming
        );
    }

    #[test]
    fn test_task_json_uses_camel_case() {
        let task = Task::new("Docs").with_due_date(date("2025-01-20"));
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["dueDate"], "2025-01-20");
        assert!(value.get("columnId").is_some());
    }

    #[test]
    fn test_checklist_item_without_id_gets_one() {
        let item: ChecklistItem = serde_json::from_str(r#"{"text": "Review"}"#).unwrap();
        assert!(!item.id.as_str().is_empty());
        assert!(!item.completed);
    }
}
