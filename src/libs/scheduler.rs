//! Task-domain facade over the storage connector.
//!
//! `TaskScheduler` adds no validation and no state of its own; it only gives
//! the presentation layer task-shaped names so it never touches SQL types.

use crate::db::tasks::Tasks;
use crate::libs::error::DbResult;
use crate::libs::task::{Task, TaskDraft, TaskFilter};
use std::path::Path;

pub struct TaskScheduler {
    tasks: Tasks,
}

impl TaskScheduler {
    pub fn open(db_path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self { tasks: Tasks::open(db_path)? })
    }

    pub fn add_task(&mut self, task: &TaskDraft) -> DbResult<i64> {
        self.tasks.insert(task)
    }

    pub fn update_task(&mut self, id: i64, task: &TaskDraft) -> DbResult<usize> {
        self.tasks.update(id, task)
    }

    pub fn delete_task(&mut self, id: i64) -> DbResult<usize> {
        self.tasks.delete(id)
    }

    pub fn get_all_tasks(&self) -> DbResult<Vec<Task>> {
        self.tasks.select_all()
    }

    pub fn get_tasks_by_params(&self, filters: &[TaskFilter]) -> DbResult<Vec<Task>> {
        self.tasks.select_where(filters)
    }

    pub fn get_task(&self, id: i64) -> DbResult<Option<Task>> {
        self.tasks.get_by_id(id)
    }

    pub fn close(&mut self) -> DbResult<()> {
        self.tasks.close()
    }
}
