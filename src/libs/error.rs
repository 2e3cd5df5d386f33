//! Error taxonomy for storage and form validation.
//!
//! Storage failures are split the way callers react to them:
//!
//! - [`DbError::Connection`]: the database file cannot be opened. Fatal at startup.
//! - [`DbError::Storage`]: a statement failed. Logged, the operation is aborted
//!   and the application keeps running.
//! - [`DbError::Query`]: a malformed filter request, i.e. a caller bug.
//! - [`DbError::Closed`]: the connection was already released.
//!
//! [`ValidationError`] covers what a user can get wrong in the form. It never
//! reaches the database layer.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to open database at {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database statement failed: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("invalid query: {0}")]
    Query(String),

    #[error("database connection is closed")]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task name must not be empty")]
    EmptyName,

    #[error("deadline is required")]
    EmptyDeadline,

    #[error("'{0}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDeadline(String),

    #[error("deadline {0} is in the past")]
    DeadlineInPast(NaiveDate),
}

pub type DbResult<T> = Result<T, DbError>;
