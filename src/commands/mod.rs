use crate::db::db::DB_FILE_NAME;
use crate::libs::data_storage::DataStorage;
use crate::libs::logging;
use crate::libs::manager::TaskManager;
use crate::libs::messages::Message;
use crate::libs::scheduler::TaskScheduler;
use crate::{msg_error, msg_error_anyhow, msg_info, tui};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file; defaults to scheduler.db in the application data directory
    #[arg(short, long, value_name = "FILE")]
    db: Option<PathBuf>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    /// The database file to open: the `--db` argument or the default data file.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new()
                .get_path(DB_FILE_NAME)
                .map_err(|e| msg_error_anyhow!(Message::DataStoragePathError(e.to_string()))),
        }
    }

    fn run(self) -> Result<()> {
        if let Err(e) = logging::init() {
            eprintln!("⚠️  {}", e);
        }

        let path = self.db_path()?;
        let scheduler = TaskScheduler::open(&path).map_err(|e| {
            let msg = Message::DbConnectionFailed(e.to_string());
            msg_error!(msg);
            msg_error_anyhow!(msg)
        })?;
        msg_info!(Message::DbOpened(path.display().to_string()));

        let mut manager = TaskManager::new(scheduler);
        let result = tui::run_tui(&mut manager);
        if let Some(notice) = manager.close() {
            eprintln!("{}", notice);
        }

        result
    }
}
