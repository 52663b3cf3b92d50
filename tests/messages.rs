#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use todo::libs::error::{ImportError, ImportWarning, RowError};
    use todo::libs::messages::Message;
    use todo::libs::task::{Priority, Task};
    use todo::libs::view::View;

    fn task(id: u64, done: bool, due: &str) -> Task {
        Task {
            id,
            uuid: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            text: format!("task {}", id),
            done,
            priority: Priority::High,
            due: due.to_string(),
            tags: vec!["+work".to_string(), "@office".to_string()],
            created: "2025-07-01 09:00:00".to_string(),
            updated: "2025-07-02 18:15:00".to_string(),
        }
    }

    #[test]
    fn test_task_messages() {
        let added = Message::TaskAdded {
            id: 4,
            text: "Buy milk".to_string(),
        };
        assert_eq!(added.to_string(), "Task added: [4] Buy milk");
        assert_eq!(Message::TaskNotFound(42).to_string(), "Task [42] not found");
        assert_eq!(Message::TaskTags(Vec::new()).to_string(), "   Tags: -");
        assert_eq!(Message::NoTasksFound.to_string(), "No tasks found");
    }

    #[test]
    fn test_import_error_messages() {
        let warning = ImportWarning::InvalidPriority {
            line: 3,
            value: "urgent".to_string(),
        };
        assert_eq!(warning.to_string(), "line 3: invalid priority 'urgent', ignored");
        assert_eq!(RowError::EmptyText { line: 5 }.to_string(), "line 5: empty text, task skipped");
        assert_eq!(
            ImportError::MissingTextColumn.to_string(),
            "Required column 'Text' is missing from the CSV header"
        );
    }

    #[test]
    fn test_table_marks_overdue_open_tasks() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        let late = task(1, false, "2025-07-01");
        let late_but_done = task(2, true, "2025-07-01");
        let upcoming = task(3, false, "2025-07-20");

        let rendered = View::tasks_table(&[&late, &late_but_done, &upcoming], today).to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        let row = |id: &str| lines.iter().find(|line| line.trim_start().starts_with(id)).unwrap().to_string();
        assert!(row("1").contains("2025-07-01 (overdue)"));
        assert!(!row("2").contains("(overdue)"));
        assert!(row("2").contains("[done: 2025-07-02 18:15:00]"));
        assert!(!row("3").contains("(overdue)"));
        assert!(row("3").contains("+work @office"));
    }
}
