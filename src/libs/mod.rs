//! Core library modules: the task record, repository, form and table state,
//! the event handlers that drive them, plus messaging, logging and data paths.

pub mod data_storage;
pub mod error;
pub mod form;
pub mod logging;
pub mod manager;
pub mod messages;
pub mod scheduler;
pub mod table;
pub mod task;
