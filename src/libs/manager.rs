//! Event handlers behind the task window.
//!
//! [`TaskManager`] wires the form, the table and the repository together and
//! knows nothing about terminals: a front end forwards button presses and row
//! clicks to the `on_*` methods and renders [`TaskManager::form`] and
//! [`TaskManager::table`] afterwards.
//!
//! Handlers never fail. Anything the user should hear about comes back as a
//! [`Notice`]; storage errors are logged and reported the same way, and the
//! window keeps running.

use super::form::{FormMode, TaskForm};
use super::messages::{Message, Notice};
use super::scheduler::TaskScheduler;
use super::table::TaskTable;
use crate::{msg_debug, msg_error, msg_info, msg_success, msg_warning};
use chrono::{Local, NaiveDate};

pub struct TaskManager {
    scheduler: TaskScheduler,
    form: TaskForm,
    table: TaskTable,
}

impl TaskManager {
    /// Creates the manager and loads every task into the table.
    pub fn new(scheduler: TaskScheduler) -> Self {
        let mut manager = Self {
            scheduler,
            form: TaskForm::new(),
            table: TaskTable::new(),
        };
        manager.load_tasks();
        manager
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn table(&self) -> &TaskTable {
        &self.table
    }

    pub fn scheduler(&self) -> &TaskScheduler {
        &self.scheduler
    }

    /// Reloads the table from storage. On failure the old rows stay on screen.
    pub fn load_tasks(&mut self) -> Option<Notice> {
        match self.scheduler.get_all_tasks() {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "tasks loaded");
                self.table.display(tasks);
                None
            }
            Err(e) => Some(self.report_error(Message::TasksLoadFailed(e.to_string()))),
        }
    }

    pub fn on_new(&mut self) -> Option<Notice> {
        match self.form.new_task() {
            Ok(()) => None,
            Err(msg) => Some(self.report_warning(msg)),
        }
    }

    pub fn on_edit(&mut self) -> Option<Notice> {
        match self.form.edit(self.table.selected_task()) {
            Ok(()) => None,
            Err(msg) => Some(self.report_warning(msg)),
        }
    }

    pub fn on_cancel(&mut self) -> Option<Notice> {
        match self.form.cancel() {
            Ok(()) => None,
            Err(msg) => Some(self.report_warning(msg)),
        }
    }

    pub fn on_save(&mut self) -> Option<Notice> {
        self.save_as_of(Local::now().date_naive())
    }

    /// Save with an explicit "today" for deadline validation.
    ///
    /// Validation failures and storage errors keep the edit session open so
    /// the user can correct the input and retry.
    pub fn save_as_of(&mut self, today: NaiveDate) -> Option<Notice> {
        if !self.form.save_enabled() {
            return Some(self.report_warning(Message::NothingToSave));
        }

        let draft = match self.form.validate(today) {
            Ok(draft) => draft,
            Err(e) => return Some(self.report_warning(e.into())),
        };

        let notice = match self.form.backing_id() {
            Some(id) => match self.scheduler.update_task(id, &draft) {
                Ok(0) => self.report_warning(Message::TaskNotFoundWithId(id)),
                Ok(_) => self.report_success(Message::TaskUpdated(draft.task_name.clone())),
                Err(e) => return Some(self.report_error(Message::TaskUpdateFailed(e.to_string()))),
            },
            None => match self.scheduler.add_task(&draft) {
                Ok(id) => {
                    tracing::debug!(id, "task inserted");
                    self.report_success(Message::TaskCreated(draft.task_name.clone()))
                }
                Err(e) => return Some(self.report_error(Message::TaskCreateFailed(e.to_string()))),
            },
        };

        self.form.reset();
        Some(self.load_tasks().unwrap_or(notice))
    }

    /// Deletes the selected row. Not available while a task is being created or edited.
    pub fn on_delete(&mut self) -> Option<Notice> {
        if self.form.fields_enabled() {
            return Some(self.report_warning(Message::FinishEditingFirst));
        }
        let Some(id) = self.table.selected_task().map(|t| t.id) else {
            return Some(self.report_warning(Message::SelectTaskFirst));
        };

        if let Err(e) = self.scheduler.delete_task(id) {
            return Some(self.report_error(Message::TaskDeleteFailed(e.to_string())));
        }

        self.form.reset();
        let notice = self.report_success(Message::TaskDeleted(id));
        Some(self.load_tasks().unwrap_or(notice))
    }

    pub fn on_search(&mut self, text: &str) -> Option<Notice> {
        let total = self.table.len();
        let visible = self.table.search(text);
        let msg = if text.is_empty() { Message::SearchCleared } else { Message::SearchResults { visible, total } };
        tracing::debug!(query = text, visible, total, "search applied");
        Some(Notice::Info(msg))
    }

    /// Shows row `row` read-only in the form. Hidden or missing rows are ignored.
    pub fn on_row_selected(&mut self, row: usize) -> Option<Notice> {
        let discarded = matches!(self.form.mode(), FormMode::Creating | FormMode::Editing);
        let task = self.table.select(row)?;
        self.form.view(task);
        if discarded {
            msg_debug!(format!("pending edit discarded by selecting row {}", row));
        }
        None
    }

    /// Releases the database connection.
    pub fn close(&mut self) -> Option<Notice> {
        match self.scheduler.close() {
            Ok(()) => {
                msg_info!(Message::DbClosed);
                None
            }
            Err(e) => Some(self.report_error(Message::DbConnectionFailed(e.to_string()))),
        }
    }

    fn report_success(&self, msg: Message) -> Notice {
        msg_success!(msg);
        Notice::Success(msg)
    }

    fn report_warning(&self, msg: Message) -> Notice {
        msg_warning!(msg);
        Notice::Warning(msg)
    }

    fn report_error(&self, msg: Message) -> Notice {
        msg_error!(msg);
        Notice::Error(msg)
    }
}
