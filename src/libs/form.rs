//! Task form state.
//!
//! The form holds a disconnected copy of one task's fields and decides which
//! of them may be edited. It moves between four modes:
//!
//! ```text
//!            new / edit              cancel / save
//!   Idle ─────────────────▶ Creating ─────────────▶ Idle
//!   Viewing                 Editing
//!
//!   any ── row selected ──▶ Viewing
//! ```
//!
//! Nothing here touches storage: [`TaskForm::validate`] turns the fields into a
//! [`TaskDraft`] and the caller decides whether that becomes an insert or an
//! update based on [`TaskForm::backing_id`].

use super::error::ValidationError;
use super::messages::Message;
use super::task::{Priority, Status, Task, TaskDraft};
use chrono::NaiveDate;

pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Idle,
    Creating,
    Editing,
    Viewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    TaskName,
    Description,
    Priority,
    Status,
    Deadline,
    Comment,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Id,
        FormField::TaskName,
        FormField::Description,
        FormField::Priority,
        FormField::Status,
        FormField::Deadline,
        FormField::Comment,
    ];

    /// Fields the user can focus while creating or editing.
    pub const EDITABLE: [FormField; 6] = [
        FormField::TaskName,
        FormField::Description,
        FormField::Priority,
        FormField::Status,
        FormField::Deadline,
        FormField::Comment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Id => "ID",
            FormField::TaskName => "Task name",
            FormField::Description => "Description",
            FormField::Priority => "Priority",
            FormField::Status => "Status",
            FormField::Deadline => "Deadline",
            FormField::Comment => "Comment",
        }
    }

    /// Priority and status are picked from a fixed list instead of typed.
    pub fn is_choice(&self) -> bool {
        matches!(self, FormField::Priority | FormField::Status)
    }

    pub fn next(&self) -> FormField {
        let i = Self::EDITABLE.iter().position(|f| f == self).map_or(0, |i| (i + 1) % Self::EDITABLE.len());
        Self::EDITABLE[i]
    }

    pub fn previous(&self) -> FormField {
        let len = Self::EDITABLE.len();
        let i = Self::EDITABLE.iter().position(|f| f == self).map_or(0, |i| (i + len - 1) % len);
        Self::EDITABLE[i]
    }
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    mode: FormMode,
    backing_id: Option<i64>,
    id: String,
    task_name: String,
    description: String,
    priority: String,
    status: String,
    deadline: String,
    comment: String,
    current_field: FormField,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Idle,
            backing_id: None,
            id: String::new(),
            task_name: String::new(),
            description: String::new(),
            priority: Priority::default().to_string(),
            status: Status::default().to_string(),
            deadline: String::new(),
            comment: String::new(),
            current_field: FormField::TaskName,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn backing_id(&self) -> Option<i64> {
        self.backing_id
    }

    pub fn current_field(&self) -> FormField {
        self.current_field
    }

    pub fn fields_enabled(&self) -> bool {
        matches!(self.mode, FormMode::Creating | FormMode::Editing)
    }

    pub fn save_enabled(&self) -> bool {
        self.fields_enabled()
    }

    pub fn cancel_enabled(&self) -> bool {
        self.fields_enabled()
    }

    /// The id field is never editable.
    pub fn is_enabled(&self, field: FormField) -> bool {
        field != FormField::Id && self.fields_enabled()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::TaskName => &self.task_name,
            FormField::Description => &self.description,
            FormField::Priority => &self.priority,
            FormField::Status => &self.status,
            FormField::Deadline => &self.deadline,
            FormField::Comment => &self.comment,
        }
    }

    /// Mutable text of a free-text field, or `None` when it is disabled or a choice field.
    pub fn input_mut(&mut self, field: FormField) -> Option<&mut String> {
        if !self.is_enabled(field) {
            return None;
        }
        match field {
            FormField::TaskName => Some(&mut self.task_name),
            FormField::Description => Some(&mut self.description),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Comment => Some(&mut self.comment),
            FormField::Id | FormField::Priority | FormField::Status => None,
        }
    }

    /// Steps a choice field to the next (or previous) option.
    ///
    /// Stored text that is not one of the options starts from the first option.
    pub fn cycle_choice(&mut self, field: FormField, forward: bool) -> bool {
        if !self.is_enabled(field) {
            return false;
        }
        match field {
            FormField::Priority => {
                let options = Priority::ALL.map(|p| p.as_str());
                self.priority = step(&options, &self.priority, forward).to_string();
                true
            }
            FormField::Status => {
                let options = Status::ALL.map(|s| s.as_str());
                self.status = step(&options, &self.status, forward).to_string();
                true
            }
            _ => false,
        }
    }

    pub fn focus(&mut self, field: FormField) {
        if field != FormField::Id {
            self.current_field = field;
        }
    }

    pub fn focus_next(&mut self) {
        self.current_field = self.current_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.current_field = self.current_field.previous();
    }

    /// Idle/Viewing → Creating with empty fields.
    pub fn new_task(&mut self) -> Result<(), Message> {
        if self.fields_enabled() {
            return Err(Message::FinishEditingFirst);
        }
        self.clear();
        self.mode = FormMode::Creating;
        Ok(())
    }

    /// Idle/Viewing → Editing, populated from `selected`.
    pub fn edit(&mut self, selected: Option<&Task>) -> Result<(), Message> {
        if self.fields_enabled() {
            return Err(Message::FinishEditingFirst);
        }
        let task = selected.ok_or(Message::SelectTaskFirst)?;
        self.populate(task);
        self.backing_id = Some(task.id);
        self.mode = FormMode::Editing;
        Ok(())
    }

    /// Creating/Editing → Idle, discarding the pending edit.
    pub fn cancel(&mut self) -> Result<(), Message> {
        if !self.fields_enabled() {
            return Err(Message::NothingToCancel);
        }
        self.reset();
        Ok(())
    }

    /// Any mode → Viewing: shows `task` read-only.
    pub fn view(&mut self, task: &Task) {
        self.populate(task);
        self.backing_id = None;
        self.mode = FormMode::Viewing;
    }

    /// Clears every field and returns to Idle.
    pub fn reset(&mut self) {
        self.clear();
        self.mode = FormMode::Idle;
    }

    /// Checks the fields and builds the draft to store.
    ///
    /// The deadline must be an ISO date no earlier than `today`. The form is
    /// left untouched either way.
    pub fn validate(&self, today: NaiveDate) -> Result<TaskDraft, ValidationError> {
        let task_name = self.task_name.trim();
        if task_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let text = self.deadline.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyDeadline);
        }
        let date = NaiveDate::parse_from_str(text, DEADLINE_FORMAT)
            .map_err(|_| ValidationError::InvalidDeadline(text.to_string()))?;
        if date < today {
            return Err(ValidationError::DeadlineInPast(date));
        }
        let deadline = date.format(DEADLINE_FORMAT).to_string();

        Ok(TaskDraft {
            task_name: task_name.to_string(),
            description: self.description.clone(),
            priority: self.priority.clone(),
            status: self.status.clone(),
            deadline,
            comment: self.comment.clone(),
        })
    }

    fn populate(&mut self, task: &Task) {
        self.id = task.id.to_string();
        self.task_name = task.task_name.clone();
        self.description = task.description.clone();
        self.priority = Priority::parse(&task.priority).map_or_else(|| task.priority.clone(), |p| p.to_string());
        self.status = Status::parse(&task.status).map_or_else(|| task.status.clone(), |s| s.to_string());
        self.deadline = task.deadline.clone();
        self.comment = task.comment.clone();
        self.current_field = FormField::TaskName;
    }

    fn clear(&mut self) {
        *self = Self { mode: self.mode, ..Self::new() };
    }
}

fn step<'a>(options: &[&'a str], current: &str, forward: bool) -> &'a str {
    let len = options.len();
    match options.iter().position(|o| *o == current) {
        Some(i) if forward => options[(i + 1) % len],
        Some(i) => options[(i + len - 1) % len],
        None => options[0],
    }
}

impl From<ValidationError> for Message {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyName => Message::TaskNameRequired,
            ValidationError::EmptyDeadline => Message::DeadlineRequired,
            ValidationError::InvalidDeadline(text) => Message::InvalidDeadline(text),
            ValidationError::DeadlineInPast(date) => Message::DeadlineInPast(date.format(DEADLINE_FORMAT).to_string()),
        }
    }
}
