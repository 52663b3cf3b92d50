//! CSV export of the task store.
//!
//! Rows follow the store order. `Text` and `Tags` are always quoted with
//! embedded quotes doubled; `ID` and `Done` are bare; the remaining fields are
//! written verbatim and only quoted if they contain a delimiter, a quote or a
//! line break.
//!
//! ```text
//! ID,UUID,Text,Done,Priority,Due,Tags,Created,Updated
//! 1,0b0c…,"Write report",false,high,2025-07-20,"+work @office",2025-07-09 10:00:00,2025-07-09 10:00:00
//! ```

use super::task::Task;
use anyhow::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CSV_HEADER: [&str; 9] = ["ID", "UUID", "Text", "Done", "Priority", "Due", "Tags", "Created", "Updated"];

pub const DEFAULT_EXPORT_FILE: &str = "todo_export.csv";

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn plain(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

fn task_record(task: &Task) -> [String; 9] {
    [
        task.id.to_string(),
        plain(&task.uuid),
        quoted(&task.text),
        task.done.to_string(),
        task.priority.as_str().to_string(),
        plain(&task.due),
        quoted(&task.tags.join(" ")),
        plain(&task.created),
        plain(&task.updated),
    ]
}

/// Writes the header and one row per task. Quoting is applied per field by
/// this module, so the underlying writer runs with quoting disabled.
pub fn write_csv<W: Write>(tasks: &[Task], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().quote_style(QuoteStyle::Never).from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for task in tasks {
        wtr.write_record(task_record(task))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes task exports to a CSV file.
pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    /// Exports to `output_path`, or to [`DEFAULT_EXPORT_FILE`] in the current
    /// directory when none is given.
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self {
            output_path: output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Overwrites the output file with `tasks`; returns the number of rows.
    pub fn export(&self, tasks: &[Task]) -> Result<usize> {
        let file = File::create(&self.output_path)?;
        write_csv(tasks, file)?;

        info!(path = %self.output_path.display(), rows = tasks.len(), "tasks exported");
        Ok(tasks.len())
    }
}
