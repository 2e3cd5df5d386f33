use chrono::NaiveDateTime;
use rusqlite::types::Value;
use std::fmt;

/// A persisted task row.
///
/// `priority` and `status` are kept as the stored text: the database accepts
/// anything, only the form restricts input to [`Priority`] and [`Status`].
/// `created` is `None` when the stored value is NULL or not a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub deadline: String,
    pub comment: String,
    pub created: Option<NaiveDateTime>,
}

impl Task {
    /// Display cells in table column order.
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.task_name.clone(),
            self.description.clone(),
            self.priority.clone(),
            self.status.clone(),
            self.deadline.clone(),
            self.comment.clone(),
        ]
    }

    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            task_name: self.task_name.clone(),
            description: self.description.clone(),
            priority: self.priority.clone(),
            status: self.status.clone(),
            deadline: self.deadline.clone(),
            comment: self.comment.clone(),
        }
    }
}

/// The mutable fields of a task, as written by insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub task_name: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub deadline: String,
    pub comment: String,
}

impl TaskDraft {
    pub fn new(task_name: &str, description: &str, priority: &str, status: &str, deadline: &str, comment: &str) -> Self {
        TaskDraft {
            task_name: task_name.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
            deadline: deadline.to_string(),
            comment: comment.to_string(),
        }
    }
}

/// Table headers, matching [`Task::cells`].
pub const COLUMN_TITLES: [&str; 7] = ["ID", "Task name", "Description", "Priority", "Status", "Deadline", "Comment"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    New,
    InProgress,
    Cancelled,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::New, Status::InProgress, Status::Cancelled, Status::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in-progress",
            Status::Cancelled => "cancelled",
            Status::Resolved => "resolved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One equality condition for [`crate::db::tasks::Tasks::select_where`].
///
/// Every variant maps to exactly one column, so a filter can never name a
/// column the table does not have.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskFilter {
    Id(i64),
    TaskName(String),
    Description(String),
    Priority(Priority),
    Status(Status),
    Deadline(String),
    Comment(String),
}

impl TaskFilter {
    pub fn column(&self) -> &'static str {
        match self {
            TaskFilter::Id(_) => "id",
            TaskFilter::TaskName(_) => "task_name",
            TaskFilter::Description(_) => "description",
            TaskFilter::Priority(_) => "priority",
            TaskFilter::Status(_) => "status",
            TaskFilter::Deadline(_) => "deadline",
            TaskFilter::Comment(_) => "comment",
        }
    }

    pub fn value(&self) -> Value {
        match self {
            TaskFilter::Id(id) => Value::Integer(*id),
            TaskFilter::TaskName(s) | TaskFilter::Description(s) | TaskFilter::Deadline(s) | TaskFilter::Comment(s) => Value::Text(s.clone()),
            TaskFilter::Priority(p) => Value::Text(p.as_str().to_string()),
            TaskFilter::Status(s) => Value::Text(s.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_and_status_parse_stored_text() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse(" medium "), Some(Priority::Medium));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(Status::parse("in-progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("done"), None);
    }

    #[test]
    fn filters_name_their_column() {
        assert_eq!(TaskFilter::Id(3).column(), "id");
        assert_eq!(TaskFilter::Status(Status::Resolved).value(), Value::Text("resolved".to_string()));
        assert_eq!(TaskFilter::Id(3).value(), Value::Integer(3));
    }
}
