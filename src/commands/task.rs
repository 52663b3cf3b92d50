use crate::{
    libs::{
        error::StoreError,
        messages::Message,
        store::Store,
        task::{is_tag, Priority},
        validation::validate_date,
    },
    msg_error, msg_error_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

fn save_failed(error: StoreError) -> anyhow::Error {
    msg_error_anyhow!(Message::StoreSaveFailed(error.to_string()))
}

/// Parses `--priority`, accepting aliases such as `h`, `haute` or `HIGH`.
pub fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::from_alias(value).ok_or_else(|| Message::InvalidPriority(value.to_string()).to_string())
}

/// Parses `--due`: empty or a real `YYYY-MM-DD` calendar date.
pub fn parse_due(value: &str) -> Result<String, String> {
    if validate_date(value) {
        Ok(value.to_string())
    } else {
        Err(Message::InvalidDate(value.to_string()).to_string())
    }
}

/// Keeps the `+project` and `@context` arguments, ignoring anything else.
fn collect_tags(args: Vec<String>) -> Vec<String> {
    args.into_iter().filter(|arg| is_tag(arg)).collect()
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description, stored as is (tags inside the text are not parsed)
    text: String,

    /// Tags: +project or @context
    tags: Vec<String>,

    /// Priority: low, medium, high (aliases: l, m, h)
    #[arg(short, long, value_parser = parse_priority, default_value = "")]
    priority: Priority,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long, value_parser = parse_due, default_value = "")]
    due: String,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task ID
    id: u64,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: u64,

    /// New description
    text: String,

    /// New tags: +project or @context (replace the current ones)
    tags: Vec<String>,
}

pub fn add(args: AddArgs, store: &mut Store) -> Result<()> {
    let task = store
        .add(&args.text, collect_tags(args.tags), args.priority, &args.due)
        .map_err(save_failed)?;

    msg_success!(Message::TaskAdded {
        id: task.id,
        text: task.text.clone()
    });
    msg_print!(Message::TaskUuid(task.uuid.clone()));
    msg_print!(Message::TaskTags(task.tags.clone()));
    msg_print!(Message::TaskPriority(task.priority.to_string()));
    Ok(())
}

pub fn done(args: IdArgs, store: &mut Store) -> Result<()> {
    match store.done(args.id).map_err(save_failed)? {
        Some(_) => msg_success!(Message::TaskDone(args.id)),
        None => msg_error!(Message::TaskNotFound(args.id)),
    }
    Ok(())
}

pub fn remove(args: IdArgs, store: &mut Store) -> Result<()> {
    match store.remove(args.id).map_err(save_failed)? {
        Some(_) => msg_success!(Message::TaskRemoved(args.id)),
        None => msg_error!(Message::TaskNotFound(args.id)),
    }
    Ok(())
}

pub fn edit(args: EditArgs, store: &mut Store) -> Result<()> {
    match store.edit(args.id, &args.text, collect_tags(args.tags)).map_err(save_failed)? {
        Some(_) => msg_success!(Message::TaskEdited(args.id)),
        None => msg_error!(Message::TaskNotFound(args.id)),
    }
    Ok(())
}
