//! CSV import command.
//!
//! Reads a CSV file written by `export` (or by hand), reconciles it with the
//! task store and prints a report. `--mode` and `--conflict` fall back to the
//! `import` section of the configuration.
//!
//! `replace` asks for confirmation before deleting the existing tasks, except
//! with `--dry-run` where nothing is deleted anyway.

use crate::{
    libs::{
        config::Config,
        error::ImportError,
        messages::Message,
        reconcile::{import_csv, ConflictStrategy, ImportMode, ImportOptions, ImportReport, RowAction},
        store::Store,
    },
    msg_bail_anyhow, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV file to import
    file: PathBuf,

    /// merge: keep existing tasks; replace: delete them first
    #[arg(short, long, value_enum)]
    mode: Option<ImportMode>,

    /// What to do when a UUID already exists
    #[arg(short, long, value_parser = ["skip", "update", "newer"])]
    conflict: Option<String>,

    /// Simulate the import without saving anything
    #[arg(long)]
    dry_run: bool,

    /// Show the decision taken for every row
    #[arg(short, long)]
    verbose: bool,
}

/// Prompts on the terminal before a `replace` import. Any prompt failure
/// (no terminal, interrupted input) counts as a refusal.
fn confirm_replace(existing: usize) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmReplace(existing).to_string())
        .default(false)
        .interact()
        .unwrap_or(false)
}

pub fn cmd(args: ImportArgs, store: &mut Store) -> Result<()> {
    let config = Config::read()?;
    let options = ImportOptions {
        mode: args.mode.unwrap_or(config.import.mode),
        conflict: match args.conflict {
            Some(name) => ConflictStrategy::from_name(&name),
            None => config.conflict_strategy(),
        },
        dry_run: args.dry_run,
    };
    let file = args.file.display().to_string();

    msg_info!(Message::ImportStarted {
        file: file.clone(),
        mode: options.mode.to_string(),
        conflict: options.conflict.to_string(),
    });

    match import_csv(store, &args.file, &options, &confirm_replace) {
        Ok(report) => {
            print_report(&file, &report, args.verbose);
            Ok(())
        }
        Err(ImportError::NoValidRows { errors }) => {
            if !errors.is_empty() {
                msg_error!(Message::ImportErrorsHeader(errors.len()));
                for error in &errors {
                    eprintln!("   {}", error);
                }
            }
            msg_bail_anyhow!(Message::ImportFailed(ImportError::NoValidRows { errors }.to_string()))
        }
        Err(ImportError::Cancelled) => msg_bail_anyhow!(Message::ImportCancelled),
        Err(error) => Err(msg_error_anyhow!(Message::ImportFailed(error.to_string()))),
    }
}

fn print_report(file: &str, report: &ImportReport, verbose: bool) {
    if let Some(count) = report.replaced {
        msg_warning!(Message::ImportReplacing(count));
    }

    if verbose {
        for entry in &report.actions {
            let (line, text) = (entry.line, entry.text.clone());
            let message = match entry.action {
                RowAction::Created { id } => Message::ImportRowCreated { line, id, text },
                RowAction::Updated { id } => Message::ImportRowUpdated { line, id, text },
                RowAction::SkippedExisting { id } => Message::ImportRowSkipped { line, id, text },
                RowAction::SkippedOlder { id } => Message::ImportRowOlder { line, id, text },
                RowAction::SkippedUnknownStrategy { id } => Message::ImportRowUnknownStrategy { line, id, text },
            };
            msg_print!(format!("   {}", message));
        }
    }

    msg_success!(Message::ImportCompleted(file.to_string()));
    msg_print!(format!("   {}", Message::ImportNewTasks(report.new_tasks)));
    msg_print!(format!("   {}", Message::ImportUpdatedTasks(report.updated_tasks)));
    msg_print!(format!("   {}", Message::ImportSkippedTasks(report.skipped_tasks)));

    if !report.warnings.is_empty() {
        msg_warning!(Message::ImportWarningsHeader(report.warnings.len()));
        for warning in &report.warnings {
            msg_print!(format!("   {}", warning));
        }
    }

    if !report.errors.is_empty() {
        msg_error!(Message::ImportErrorsHeader(report.errors.len()));
        for error in &report.errors {
            eprintln!("   {}", error);
        }
    }

    msg_print!(Message::ImportTotal(report.total()));

    if report.dry_run {
        msg_info!(Message::ImportDryRun);
    }
}
