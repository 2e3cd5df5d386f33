//! SQLite persistence.
//!
//! [`db::Db`] owns the connection; [`tasks::Tasks`] runs the statements for
//! the `scheduler` table, one prepared statement per call.

pub mod db;
pub mod tasks;
