use crate::libs::error::{DbError, DbResult};
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "scheduler.db";

/// A single long-lived SQLite connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file at `path`, creating it if absent.
    ///
    /// SQLite opens files lazily, so the header is read once here: a directory,
    /// a missing parent folder or a file that is not a database all fail now as
    /// [`DbError::Connection`] rather than on the first real statement.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Db> {
        let path = path.as_ref();
        let connection_error = |source| DbError::Connection { path: path.to_path_buf(), source };

        let conn = Connection::open(path).map_err(connection_error)?;
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(connection_error)?;
        tracing::debug!(path = %path.display(), "database opened");

        Ok(Db { conn })
    }
}
