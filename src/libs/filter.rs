//! Filtering and ordering of task views.

use super::task::{Task, TaskFilter};
use std::cmp::Reverse;

fn tag_matches<'a>(mut remainders: impl Iterator<Item = &'a str>, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    remainders.any(|rest| rest.to_lowercase().contains(&needle))
}

/// True when `task` passes every active criterion.
pub fn matches(task: &Task, criteria: &TaskFilter) -> bool {
    if task.done && !criteria.include_done {
        return false;
    }
    if !criteria.project.is_empty() && !tag_matches(task.projects(), &criteria.project) {
        return false;
    }
    if !criteria.context.is_empty() && !tag_matches(task.contexts(), &criteria.context) {
        return false;
    }
    match criteria.priority {
        Some(priority) if priority.is_set() => task.priority == priority,
        _ => true,
    }
}

/// Tasks passing `criteria`, in their original order.
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| matches(task, criteria)).collect()
}

/// Orders by priority (high first), then by ascending id.
pub fn sort_tasks(tasks: &mut [&Task]) {
    tasks.sort_by_key(|task| (Reverse(task.priority.rank()), task.id));
}
