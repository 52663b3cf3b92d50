//! # todo - a command-line task manager
//!
//! Tasks live in a single JSON file in the data directory (`~/.todo` or
//! `$TODO_DIR`). Each task has a session-local numeric id and a uuid that
//! identifies it across stores, which is what CSV import and export rely on.
//!
//! ## Features
//!
//! - **Task Management**: add, list, complete, edit and remove tasks
//! - **Organization**: `+project` and `@context` tags, priorities, due dates
//! - **Data Exchange**: CSV export and import with merge or replace modes
//!   and skip, update or newer conflict strategies
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo::libs::store::Store;
//! use todo::libs::task::{Priority, TaskFilter};
//!
//! let mut store = Store::load("/tmp/todo.json");
//! store.add("Write the report", vec!["+work".into()], Priority::High, "")?;
//! for task in store.list(&TaskFilter::default()) {
//!     println!("[{}] {}", task.id, task.text);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod commands;
pub mod libs;
