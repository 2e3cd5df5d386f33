//! # taskman
//!
//! A keyboard-driven task tracker. Tasks (name, description, priority,
//! status, deadline, comment) live in a single SQLite table and are edited
//! through a form-over-table terminal window.
//!
//! ## Layers
//!
//! - [`db`]: connection handling and the `scheduler` table
//! - [`libs::scheduler`]: task-domain facade over storage
//! - [`libs::form`] and [`libs::table`]: form state machine and search view
//! - [`libs::manager`]: the `on_*` event handlers tying them together
//! - [`tui`]: the ratatui front end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::manager::TaskManager;
//! use taskman::libs::scheduler::TaskScheduler;
//!
//! let scheduler = TaskScheduler::open("scheduler.db")?;
//! let mut manager = TaskManager::new(scheduler);
//! manager.on_new();
//! # Ok::<(), taskman::libs::error::DbError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod tui;
