#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),  // task name
    TaskUpdated(String),  // task name
    TaskDeleted(i64),     // id
    TaskNotFoundWithId(i64),
    TaskCreateFailed(String), // error
    TaskUpdateFailed(String), // error
    TaskDeleteFailed(String), // error
    TasksLoaded(usize),       // count
    TasksLoadFailed(String),  // error

    // === FORM MESSAGES ===
    SelectTaskFirst,
    FinishEditingFirst,
    NothingToCancel,
    NothingToSave,
    TaskNameRequired,
    DeadlineRequired,
    InvalidDeadline(String), // entered text
    DeadlineInPast(String),  // date

    // === SEARCH MESSAGES ===
    SearchResults { visible: usize, total: usize },
    SearchCleared,

    // === DATABASE MESSAGES ===
    DbOpened(String), // path
    DbConnectionFailed(String),
    DbClosed,
    DataStoragePathError(String),
}
