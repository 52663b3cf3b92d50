//! Import reconciliation.
//!
//! Merges parsed CSV records into a [`Store`], using the task `uuid` as the
//! identity across stores. Incoming records with an unknown uuid become new
//! tasks; records matching an existing task are resolved by the
//! [`ConflictStrategy`].
//!
//! The reconciler always works on a copy of the store contents and commits it
//! at the end, so a dry run walks the exact same path as a real import and
//! reports identical counts.

use super::error::{ImportError, ImportWarning, RowError, StoreError};
use super::import::{parse_csv_file, ImportRecord, ParsedCsv};
use super::store::{Store, FIRST_ID};
use super::task::Task;
use super::validation::{is_newer, now_timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Keep existing tasks and reconcile incoming ones against them.
    #[default]
    Merge,
    /// Drop every existing task first (after confirmation).
    Replace,
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportMode::Merge => f.write_str("merge"),
            ImportMode::Replace => f.write_str("replace"),
        }
    }
}

/// What to do when an incoming uuid already exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConflictStrategy {
    #[default]
    Skip,
    Update,
    /// Update only when the incoming `updated` stamp is strictly later.
    Newer,
    /// Unrecognized name; conflicts are skipped with a warning.
    Unknown(String),
}

impl ConflictStrategy {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "skip" => ConflictStrategy::Skip,
            "update" => ConflictStrategy::Update,
            "newer" => ConflictStrategy::Newer,
            _ => ConflictStrategy::Unknown(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConflictStrategy::Skip => "skip",
            ConflictStrategy::Update => "update",
            ConflictStrategy::Newer => "newer",
            ConflictStrategy::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ConflictStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub mode: ImportMode,
    pub conflict: ConflictStrategy,
    pub dry_run: bool,
}

/// Asked before a `replace` import wipes the store. Receives the number of
/// tasks about to be deleted.
pub trait ConfirmReplace {
    fn confirm_replace(&self, existing: usize) -> bool;
}

impl<F> ConfirmReplace for F
where
    F: Fn(usize) -> bool,
{
    fn confirm_replace(&self, existing: usize) -> bool {
        self(existing)
    }
}

/// Decision taken for one imported row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Created { id: u64 },
    Updated { id: u64 },
    SkippedExisting { id: u64 },
    SkippedOlder { id: u64 },
    SkippedUnknownStrategy { id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAction {
    pub line: u64,
    pub text: String,
    pub action: RowAction,
}

#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    pub new_tasks: usize,
    pub updated_tasks: usize,
    pub skipped_tasks: usize,
    pub warnings: Vec<ImportWarning>,
    pub errors: Vec<RowError>,
    pub actions: Vec<ImportAction>,
    pub dry_run: bool,
    /// Number of tasks dropped by a `replace` import.
    pub replaced: Option<usize>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.new_tasks + self.updated_tasks + self.skipped_tasks
    }

    /// True when the import added or modified at least one task.
    pub fn changed(&self) -> bool {
        self.new_tasks > 0 || self.updated_tasks > 0
    }
}

fn apply_update(existing: &mut Task, incoming: &Task) {
    existing.text = incoming.text.clone();
    existing.done = incoming.done;
    existing.priority = incoming.priority;
    existing.due = incoming.due.clone();
    existing.tags = incoming.tags.clone();
    existing.updated = now_timestamp();
}

/// Reconciles `parsed` into `store` according to `options`.
///
/// Fails with [`ImportError::NoValidRows`] when nothing could be parsed, and
/// with [`ImportError::Cancelled`] when a `replace` is declined. Unless
/// `dry_run` is set, the store is updated and, if any task was added or
/// changed, saved once.
pub fn reconcile(store: &mut Store, parsed: ParsedCsv, options: &ImportOptions, confirm: &dyn ConfirmReplace) -> Result<ImportReport, ImportError> {
    let ParsedCsv { records, warnings, errors } = parsed;
    if records.is_empty() {
        return Err(ImportError::NoValidRows { errors });
    }

    let mut report = ImportReport {
        warnings,
        errors,
        dry_run: options.dry_run,
        ..ImportReport::default()
    };

    let (mut tasks, mut next_id) = match options.mode {
        ImportMode::Merge => (store.tasks().to_vec(), store.next_id()),
        ImportMode::Replace => {
            if !options.dry_run && !confirm.confirm_replace(store.len()) {
                return Err(ImportError::Cancelled);
            }
            report.replaced = Some(store.len());
            (Vec::new(), FIRST_ID)
        }
    };

    let mut by_uuid: HashMap<String, usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| !task.uuid.is_empty())
        .map(|(index, task)| (task.uuid.clone(), index))
        .collect();

    for ImportRecord { line, mut task } in records {
        let text = task.text.clone();
        let action = match by_uuid.get(&task.uuid).copied() {
            None => {
                task.id = next_id;
                next_id = next_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
                by_uuid.insert(task.uuid.clone(), tasks.len());
                let id = task.id;
                tasks.push(task);
                RowAction::Created { id }
            }
            Some(index) => {
                let existing = &mut tasks[index];
                let id = existing.id;
                match &options.conflict {
                    ConflictStrategy::Skip => RowAction::SkippedExisting { id },
                    ConflictStrategy::Update => {
                        apply_update(existing, &task);
                        RowAction::Updated { id }
                    }
                    ConflictStrategy::Newer if is_newer(&task.updated, &existing.updated) => {
                        apply_update(existing, &task);
                        RowAction::Updated { id }
                    }
                    ConflictStrategy::Newer => RowAction::SkippedOlder { id },
                    ConflictStrategy::Unknown(strategy) => {
                        report.warnings.push(ImportWarning::UnknownStrategy {
                            line,
                            strategy: strategy.clone(),
                        });
                        RowAction::SkippedUnknownStrategy { id }
                    }
                }
            }
        };

        match action {
            RowAction::Created { .. } => report.new_tasks += 1,
            RowAction::Updated { .. } => report.updated_tasks += 1,
            _ => report.skipped_tasks += 1,
        }
        debug!(line, ?action, "import row");
        report.actions.push(ImportAction { line, text, action });
    }

    if !options.dry_run {
        store.replace_contents(tasks, next_id);
        if report.changed() {
            store.save()?;
        }
    }

    info!(
        new = report.new_tasks,
        updated = report.updated_tasks,
        skipped = report.skipped_tasks,
        dry_run = options.dry_run,
        "import reconciled"
    );
    Ok(report)
}

/// Parses `path` and reconciles it into `store`.
pub fn import_csv(store: &mut Store, path: &Path, options: &ImportOptions, confirm: &dyn ConfirmReplace) -> Result<ImportReport, ImportError> {
    let parsed = parse_csv_file(path)?;
    reconcile(store, parsed, options, confirm)
}
