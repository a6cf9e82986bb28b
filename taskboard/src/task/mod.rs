//! Task commands

mod add;
mod checklist;
mod delete;
mod get;
mod list;
mod mv;
mod update;

pub use add::AddTask;
pub use checklist::ToggleChecklistItem;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use list::ListTasks;
pub use mv::MoveTask;
pub use update::UpdateTask;
