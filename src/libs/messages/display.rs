//! Human-readable text for [`Message`].
//!
//! All user-facing wording lives here, so the form, the window and the log
//! share one catalogue.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Task '{}' created", name),
            Message::TaskUpdated(name) => format!("Task '{}' updated", name),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskCreateFailed(error) => format!("Failed to create task: {}", error),
            Message::TaskUpdateFailed(error) => format!("Failed to update task: {}", error),
            Message::TaskDeleteFailed(error) => format!("Failed to delete task: {}", error),
            Message::TasksLoaded(count) => format!("Loaded {} task(s)", count),
            Message::TasksLoadFailed(error) => format!("Failed to load tasks: {}", error),

            // === FORM MESSAGES ===
            Message::SelectTaskFirst => "Select a task first.".to_string(),
            Message::FinishEditingFirst => "Save or cancel the current edit first.".to_string(),
            Message::NothingToCancel => "There is no edit to cancel.".to_string(),
            Message::NothingToSave => "There is nothing to save.".to_string(),
            Message::TaskNameRequired => "Task name must not be empty.".to_string(),
            Message::DeadlineRequired => "Deadline is required, expected YYYY-MM-DD.".to_string(),
            Message::InvalidDeadline(text) => format!("Invalid deadline '{}', expected YYYY-MM-DD.", text),
            Message::DeadlineInPast(date) => format!("Deadline {} is in the past.", date),

            // === SEARCH MESSAGES ===
            Message::SearchResults { visible, total } => format!("{} of {} task(s) match", visible, total),
            Message::SearchCleared => "Search cleared".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbOpened(path) => format!("Database opened: {}", path),
            Message::DbConnectionFailed(error) => format!("Failed to connect to database: {}", error),
            Message::DbClosed => "Database connection closed".to_string(),
            Message::DataStoragePathError(error) => format!("Failed to prepare data directory: {}", error),
        };
        write!(f, "{}", text)
    }
}
