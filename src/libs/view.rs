use super::task::{Priority, Task};
use super::validation::parse_date;
use chrono::{Local, NaiveDate};
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        Self::tasks_table(tasks, Local::now().date_naive()).printstd();
    }

    /// Builds the `list` table. Due dates before `today` on open tasks are
    /// flagged as overdue.
    pub fn tasks_table(tasks: &[&Task], today: NaiveDate) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.set_titles(row!["ID", "", "PRIORITY", "DUE", "TASK", "TAGS"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                Self::status(task),
                Self::priority(task.priority),
                Self::due(task, today),
                task.text,
                task.tags.join(" ")
            ]);
        }

        table
    }

    fn status(task: &Task) -> String {
        if task.done {
            format!("✅ [done: {}]", task.updated)
        } else {
            "⭕".to_string()
        }
    }

    fn priority(priority: Priority) -> &'static str {
        match priority {
            Priority::High => "❗ high",
            Priority::Medium => "⚠️ medium",
            Priority::Low => "ℹ️ low",
            Priority::Unset => "",
        }
    }

    fn due(task: &Task, today: NaiveDate) -> String {
        match parse_date(&task.due) {
            Some(date) if date < today && !task.done => format!("{} (overdue)", task.due),
            _ => task.due.clone(),
        }
    }
}
