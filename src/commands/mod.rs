//! Command-line interface.
//!
//! Each subcommand lives in its own module and exposes an `Args` struct plus
//! a handler. Commands that touch tasks receive the [`Store`] loaded once
//! from the data directory.

pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod task;
pub mod version;

use crate::{
    libs::{
        data_storage::{DataStorage, STORE_FILE_NAME},
        messages::Message,
        store::{LoadOutcome, Store},
    },
    msg_debug,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(task::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task as done", arg_required_else_help = true)]
    Done(task::IdArgs),
    #[command(about = "Remove a task", arg_required_else_help = true)]
    Remove(task::IdArgs),
    #[command(about = "Edit the text and tags of a task", arg_required_else_help = true)]
    Edit(task::EditArgs),
    #[command(about = "Export all tasks to a CSV file")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from a CSV file", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Show or initialize the configuration")]
    Config(config::ConfigArgs),
    #[command(about = "Show version and build information")]
    Version,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => task::add(args, &mut open_store()?),
            Commands::List(args) => list::cmd(args, &open_store()?),
            Commands::Done(args) => task::done(args, &mut open_store()?),
            Commands::Remove(args) => task::remove(args, &mut open_store()?),
            Commands::Edit(args) => task::edit(args, &mut open_store()?),
            Commands::Export(args) => export::cmd(args, &open_store()?),
            Commands::Import(args) => import::cmd(args, &mut open_store()?),
            Commands::Config(args) => config::cmd(args),
            Commands::Version => version::cmd(),
        }
    }
}

/// Loads the task store from the data directory. An unreadable file yields
/// an empty store; it is only mentioned in debug mode.
fn open_store() -> Result<Store> {
    let store = Store::load(DataStorage::new().get_path(STORE_FILE_NAME)?);
    if let LoadOutcome::Recovered(reason) = store.load_outcome() {
        msg_debug!(Message::StoreRecovered(format!("{} ({})", store.path().display(), reason)));
    }
    Ok(store)
}
