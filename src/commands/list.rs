//! Task listing command.
//!
//! Shows open tasks by default, highest priority first. Filters combine:
//! `--project` and `--context` match a tag name with or without its `+`/`@`
//! sign, case-insensitively.

use super::task::parse_priority;
use crate::{
    libs::{
        messages::Message,
        store::Store,
        task::{Priority, TaskFilter},
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include completed tasks
    #[arg(short, long)]
    all: bool,

    /// Only tasks tagged with this project (+name)
    #[arg(long, default_value = "")]
    project: String,

    /// Only tasks tagged with this context (@name)
    #[arg(long, default_value = "")]
    context: String,

    /// Only tasks with this priority
    #[arg(long, value_parser = parse_priority)]
    priority: Option<Priority>,
}

impl From<ListArgs> for TaskFilter {
    fn from(args: ListArgs) -> Self {
        TaskFilter {
            include_done: args.all,
            project: args.project.trim_start_matches('+').to_string(),
            context: args.context.trim_start_matches('@').to_string(),
            priority: args.priority,
        }
    }
}

pub fn cmd(args: ListArgs, store: &Store) -> Result<()> {
    let tasks = store.list(&args.into());

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&tasks);
    Ok(())
}
