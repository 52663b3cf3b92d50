//! CSV export command.

use crate::{
    libs::{config::Config, export::Exporter, messages::Message, store::Store},
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file (defaults to `export.file` from the configuration)
    file: Option<PathBuf>,
}

/// Writes every task, completed ones included, in store order.
pub fn cmd(args: ExportArgs, store: &Store) -> Result<()> {
    let output = match args.file {
        Some(file) => file,
        None => PathBuf::from(Config::read()?.export.file),
    };

    let exporter = Exporter::new(Some(output));
    let count = exporter
        .export(store.tasks())
        .map_err(|e| msg_error_anyhow!(Message::ExportFailed(e.to_string())))?;

    msg_success!(Message::ExportCompleted {
        path: exporter.output_path().display().to_string(),
        count
    });
    Ok(())
}
