//! Display implementation for application messages.
//!
//! Every user-facing sentence is written here, in one match, so the wording
//! stays consistent across commands and the command modules only deal with
//! structured [`Message`] values.
//!
//! ```rust
//! use todo::libs::messages::Message;
//!
//! assert_eq!(Message::TaskDone(3).to_string(), "Task [3] marked as done");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded { id, text } => format!("Task added: [{}] {}", id, text),
            Message::TaskUuid(uuid) => format!("   UUID: {}", uuid),
            Message::TaskTags(tags) => format!("   Tags: {}", if tags.is_empty() { "-".to_string() } else { tags.join(" ") }),
            Message::TaskPriority(priority) => format!("   Priority: {}", if priority.is_empty() { "-" } else { priority }),
            Message::TaskDone(id) => format!("Task [{}] marked as done", id),
            Message::TaskRemoved(id) => format!("Task [{}] removed", id),
            Message::TaskEdited(id) => format!("Task [{}] updated", id),
            Message::TaskNotFound(id) => format!("Task [{}] not found", id),
            Message::NoTasksFound => "No tasks found".to_string(),

            // === VALIDATION MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}'. Use YYYY-MM-DD", value),
            Message::InvalidPriority(value) => format!("Invalid priority '{}'. Use low, medium or high", value),

            // === STORE MESSAGES ===
            Message::StoreRecovered(path) => format!("Task file {} could not be read, starting with an empty list", path),
            Message::StoreSaveFailed(error) => format!("Failed to save tasks: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted { path, count } => format!("Export completed: {} ({} tasks)", path, count),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === IMPORT MESSAGES ===
            Message::ImportStarted { file, mode, conflict } => {
                format!("Importing CSV: {} (mode: {}, conflict: {})", file, mode, conflict)
            }
            Message::ImportReplacing(count) => format!("Replace mode: {} existing tasks removed", count),
            Message::ConfirmReplace(count) => {
                format!("Replace mode will delete all {} existing tasks. Continue?", count)
            }
            Message::ImportCancelled => "Import cancelled".to_string(),
            Message::ImportCompleted(file) => format!("Import completed: {}", file),
            Message::ImportNewTasks(count) => format!("{} new tasks", count),
            Message::ImportUpdatedTasks(count) => format!("{} tasks updated", count),
            Message::ImportSkippedTasks(count) => format!("{} tasks skipped", count),
            Message::ImportWarningsHeader(count) => format!("{} warning(s):", count),
            Message::ImportErrorsHeader(count) => format!("{} error(s):", count),
            Message::ImportTotal(count) => format!("Total processed: {} tasks", count),
            Message::ImportDryRun => "Dry run: no changes were made".to_string(),
            Message::ImportFailed(error) => format!("Import failed: {}", error),
            Message::ImportRowCreated { line, id, text } => format!("line {}: new task [{}] {}", line, id, text),
            Message::ImportRowUpdated { line, id, text } => format!("line {}: task [{}] updated: {}", line, id, text),
            Message::ImportRowSkipped { line, id, text } => {
                format!("line {}: task [{}] skipped, UUID already exists: {}", line, id, text)
            }
            Message::ImportRowOlder { line, id, text } => {
                format!("line {}: task [{}] skipped, local version is newer: {}", line, id, text)
            }
            Message::ImportRowUnknownStrategy { line, id, text } => {
                format!("line {}: task [{}] skipped, unknown conflict strategy: {}", line, id, text)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigPath(path) => format!("Configuration file: {}", path),
            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),

            // === VERSION MESSAGES ===
            Message::VersionInfo { name, version } => format!("{} v{}", name, version),
            Message::BuildTime(time) => format!("Build time: {}", time),
            Message::GitCommit(commit) => format!("Git commit: {}", commit),
        };

        write!(f, "{}", text)
    }
}
