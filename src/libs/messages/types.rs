#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded { id: u64, text: String },
    TaskUuid(String),
    TaskTags(Vec<String>),
    TaskPriority(String),
    TaskDone(u64),
    TaskRemoved(u64),
    TaskEdited(u64),
    TaskNotFound(u64),
    NoTasksFound,

    // === VALIDATION MESSAGES ===
    InvalidDate(String),
    InvalidPriority(String),

    // === STORE MESSAGES ===
    StoreRecovered(String), // path
    StoreSaveFailed(String),

    // === EXPORT MESSAGES ===
    ExportCompleted { path: String, count: usize },
    ExportFailed(String),

    // === IMPORT MESSAGES ===
    ImportStarted {
        file: String,
        mode: String,
        conflict: String,
    },
    ImportReplacing(usize),
    ConfirmReplace(usize),
    ImportCancelled,
    ImportCompleted(String), // file
    ImportNewTasks(usize),
    ImportUpdatedTasks(usize),
    ImportSkippedTasks(usize),
    ImportWarningsHeader(usize),
    ImportErrorsHeader(usize),
    ImportTotal(usize),
    ImportDryRun,
    ImportFailed(String),
    ImportRowCreated { line: u64, id: u64, text: String },
    ImportRowUpdated { line: u64, id: u64, text: String },
    ImportRowSkipped { line: u64, id: u64, text: String },
    ImportRowOlder { line: u64, id: u64, text: String },
    ImportRowUnknownStrategy { line: u64, id: u64, text: String },

    // === CONFIGURATION MESSAGES ===
    ConfigPath(String),
    ConfigSaved(String),
    ConfigParseError(String),

    // === VERSION MESSAGES ===
    VersionInfo { name: String, version: String },
    BuildTime(String),
    GitCommit(String),
}
