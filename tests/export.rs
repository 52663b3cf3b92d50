#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo::libs::export::{write_csv, Exporter, CSV_HEADER, DEFAULT_EXPORT_FILE};
    use todo::libs::store::Store;
    use todo::libs::task::{Priority, Task};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_task() -> Task {
        Task {
            id: 7,
            uuid: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            text: "Write report".to_string(),
            done: false,
            priority: Priority::High,
            due: "2025-07-20".to_string(),
            tags: vec!["+work".to_string(), "@office".to_string()],
            created: "2025-07-09 10:00:00".to_string(),
            updated: "2025-07-09 11:30:00".to_string(),
        }
    }

    fn render(tasks: &[Task]) -> String {
        let mut buffer = Vec::new();
        write_csv(tasks, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_empty_store_exports_header_only() {
        let output = render(&[]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec![CSV_HEADER.join(",")]);
    }

    #[test]
    fn test_row_layout_and_quoting() {
        let output = render(&[sample_task()]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID,UUID,Text,Done,Priority,Due,Tags,Created,Updated");
        assert_eq!(
            lines[1],
            "7,550e8400-e29b-41d4-a716-446655440000,\"Write report\",false,high,2025-07-20,\"+work @office\",2025-07-09 10:00:00,2025-07-09 11:30:00"
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut task = sample_task();
        task.text = "He said \"hi\", then left".to_string();
        task.tags.clear();
        task.priority = Priority::Unset;
        task.done = true;

        let output = render(&[task]);
        let row = output.lines().nth(1).unwrap();
        assert!(row.starts_with("7,550e8400-e29b-41d4-a716-446655440000,\"He said \"\"hi\"\", then left\",true,,"));
        assert!(row.contains(",\"\","));
    }

    #[test]
    fn test_rows_follow_store_order() {
        let mut first = sample_task();
        first.id = 2;
        let mut second = sample_task();
        second.id = 1;

        let output = render(&[first, second]);
        let ids: Vec<&str> = output.lines().skip(1).map(|line| line.split(',').next().unwrap()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_exporter_writes_file(ctx: &mut ExportTestContext) {
        let mut store = Store::load(ctx.temp_dir.path().join("todo.json"));
        store.add("Buy milk", vec!["+home".to_string()], Priority::Low, "").unwrap();
        store.add("Done already", Vec::new(), Priority::Unset, "").unwrap();
        store.done(2).unwrap();

        let output_path = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(Some(output_path.clone()));
        let count = exporter.export(store.tasks()).unwrap();

        assert_eq!(count, 2);
        let content = fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("\"Buy milk\""));
        assert!(content.contains("\"Done already\",true"));
    }

    #[test]
    fn test_exporter_default_path() {
        let exporter = Exporter::new(None);
        assert_eq!(exporter.output_path().to_str(), Some(DEFAULT_EXPORT_FILE));
    }
}
