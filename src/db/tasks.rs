use super::db::Db;
use crate::libs::error::{DbError, DbResult};
use crate::libs::task::{Task, TaskDraft, TaskFilter};
use chrono::NaiveDateTime;
use rusqlite::types::FromSql;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const SCHEMA_SCHEDULER: &str = "CREATE TABLE IF NOT EXISTS scheduler (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task_name TEXT NOT NULL,
    description TEXT,
    priority TEXT,
    status TEXT,
    deadline TEXT,
    comment TEXT,
    created TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const INSERT_TASK: &str = "INSERT INTO scheduler (task_name, description, priority, status, deadline, comment) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str = "UPDATE scheduler SET task_name = ?2, description = ?3, priority = ?4, status = ?5, deadline = ?6, comment = ?7 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM scheduler WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, task_name, description, priority, status, deadline, comment, created FROM scheduler";
const ORDER_BY_DEADLINE: &str = "ORDER BY deadline, id";

/// Storage connector for the `scheduler` table.
///
/// Every call prepares and runs its own statement; nothing but the connection
/// itself outlives a call.
pub struct Tasks {
    conn: Option<Connection>,
}

impl Tasks {
    /// Opens the database at `path` and makes sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Tasks> {
        let db = Db::open(path)?;
        let tasks = Tasks { conn: Some(db.conn) };
        tasks.ensure_schema()?;

        Ok(tasks)
    }

    pub fn ensure_schema(&self) -> DbResult<()> {
        self.conn()?.execute(SCHEMA_SCHEDULER, [])?;

        Ok(())
    }

    fn conn(&self) -> DbResult<&Connection> {
        self.conn.as_ref().ok_or(DbError::Closed)
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Appends a row and returns its id.
    pub fn insert(&mut self, task: &TaskDraft) -> DbResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            INSERT_TASK,
            params![task.task_name, task.description, task.priority, task.status, task.deadline, task.comment],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Overwrites every mutable column of row `id`. Returns the number of rows
    /// changed, `0` when there is no such row.
    pub fn update(&mut self, id: i64, task: &TaskDraft) -> DbResult<usize> {
        let affected = self.conn()?.execute(
            UPDATE_TASK,
            params![id, task.task_name, task.description, task.priority, task.status, task.deadline, task.comment],
        )?;

        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> DbResult<usize> {
        let affected = self.conn()?.execute(DELETE_TASK, params![id])?;

        Ok(affected)
    }

    /// All rows, ascending by the deadline text.
    pub fn select_all(&self) -> DbResult<Vec<Task>> {
        let mut stmt = self.conn()?.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_DEADLINE))?;
        let task_iter = stmt.query_map([], Self::row_to_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Rows matching every filter. An empty filter list is rejected.
    pub fn select_where(&self, filters: &[TaskFilter]) -> DbResult<Vec<Task>> {
        if filters.is_empty() {
            return Err(DbError::Query("at least one filter is required".to_string()));
        }

        let conditions: Vec<String> = filters
            .iter()
            .enumerate()
            .map(|(i, filter)| format!("{} = ?{}", filter.column(), i + 1))
            .collect();
        let values: Vec<_> = filters.iter().map(TaskFilter::value).collect();
        let sql = format!("{} WHERE {} {}", SELECT_TASKS, conditions.join(" AND "), ORDER_BY_DEADLINE);

        let mut stmt = self.conn()?.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), Self::row_to_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64) -> DbResult<Option<Task>> {
        self.conn()?
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], Self::row_to_task)
            .optional()
            .map_err(Into::into)
    }

    /// Releases the connection. Calling it again does nothing.
    pub fn close(&mut self) -> DbResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| DbError::Storage(e))?;
            tracing::debug!("database connection closed");
        }

        Ok(())
    }

    fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            task_name: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            priority: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            status: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            deadline: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
            comment: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
            created: NaiveDateTime::column_result(row.get_ref(7)?).ok(),
        })
    }
}
