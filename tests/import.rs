#[cfg(test)]
mod tests {
    use std::path::Path;
    use todo::libs::error::{ImportError, ImportWarning, RowError};
    use todo::libs::import::{parse_csv, parse_csv_file};
    use todo::libs::task::Priority;
    use todo::libs::validation::{is_valid_timestamp, is_valid_uuid};

    const HEADER: &str = "ID,UUID,Text,Done,Priority,Due,Tags,Created,Updated\n";

    #[test]
    fn test_missing_text_column() {
        let result = parse_csv("ID,UUID,Done\n1,,false\n".as_bytes());
        assert!(matches!(result, Err(ImportError::MissingTextColumn)));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_csv_file(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_full_row() {
        let csv = format!(
            "{}1,550e8400-e29b-41d4-a716-446655440000,\"Write report\",true,high,2025-07-20,\"+work @office\",2025-07-09 10:00:00,2025-07-09 11:30:00\n",
            HEADER
        );
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert!(parsed.warnings.is_empty());
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.records.len(), 1);

        let record = &parsed.records[0];
        assert_eq!(record.line, 2);
        assert_eq!(record.task.id, 0);
        assert_eq!(record.task.uuid, "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(record.task.text, "Write report");
        assert!(record.task.done);
        assert_eq!(record.task.priority, Priority::High);
        assert_eq!(record.task.due, "2025-07-20");
        assert_eq!(record.task.tags, vec!["+work", "@office"]);
        assert_eq!(record.task.created, "2025-07-09 10:00:00");
        assert_eq!(record.task.updated, "2025-07-09 11:30:00");
    }

    #[test]
    fn test_columns_by_name_in_any_order_and_case() {
        let csv = "priority,TAGS, text \nLOW,+home chores,Wash car\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        let task = &parsed.records[0].task;
        assert_eq!(task.text, "Wash car");
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.tags, vec!["+home"]);
        assert!(!task.done);
        assert!(is_valid_uuid(&task.uuid));
        assert!(is_valid_timestamp(&task.created));
        assert!(is_valid_timestamp(&task.updated));
    }

    #[test]
    fn test_invalid_fields_produce_warnings_but_keep_row() {
        let csv = format!("{}1,not-a-uuid,Fix bug,false,Urgent,2025-02-30,,yesterday,later\n", HEADER);
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 1);
        let task = &parsed.records[0].task;
        assert!(is_valid_uuid(&task.uuid));
        assert_eq!(task.priority, Priority::Unset);
        assert_eq!(task.due, "");
        assert!(is_valid_timestamp(&task.created));

        assert_eq!(
            parsed.warnings,
            vec![
                ImportWarning::InvalidUuid {
                    line: 2,
                    value: "not-a-uuid".to_string()
                },
                ImportWarning::InvalidPriority {
                    line: 2,
                    value: "urgent".to_string()
                },
                ImportWarning::InvalidDue {
                    line: 2,
                    value: "2025-02-30".to_string()
                },
                ImportWarning::InvalidCreated {
                    line: 2,
                    value: "yesterday".to_string()
                },
                ImportWarning::InvalidUpdated {
                    line: 2,
                    value: "later".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_uuid_is_normalized_to_lowercase() {
        let csv = "UUID,Text\nF47AC10B-58CC-4372-A567-0E02B2C3D479,Upper\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed.records[0].task.uuid, "f47ac10b-58cc-4372-a567-0e02b2c3d479");
    }

    #[test]
    fn test_done_values() {
        let csv = "Text,Done\na,TRUE\nb,1\nc,yes\nd,\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();
        let done: Vec<bool> = parsed.records.iter().map(|record| record.task.done).collect();
        assert_eq!(done, vec![true, true, false, false]);
    }

    #[test]
    fn test_empty_text_is_a_row_error() {
        let csv = "Text,Priority\nfirst,low\n  ,high\nthird,\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.errors, vec![RowError::EmptyText { line: 3 }]);
        assert_eq!(parsed.records[1].line, 4);
    }

    #[test]
    fn test_blank_rows_are_ignored() {
        let csv = "Text,Tags\nfirst,\n,\n\nsecond,+x\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert!(parsed.errors.is_empty());
        let texts: Vec<&str> = parsed.records.iter().map(|record| record.task.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_short_rows_use_defaults() {
        let csv = format!("{}3,,Short row\n", HEADER);
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert!(parsed.warnings.is_empty());
        let task = &parsed.records[0].task;
        assert_eq!(task.text, "Short row");
        assert!(task.tags.is_empty());
        assert_eq!(task.due, "");
    }

    #[test]
    fn test_header_only_has_no_records() {
        let parsed = parse_csv(HEADER.as_bytes()).unwrap();
        assert!(parsed.records.is_empty());
        assert!(parsed.errors.is_empty());
    }

    fn malformed_lines(errors: &[RowError]) -> Vec<u64> {
        errors
            .iter()
            .map(|error| match error {
                RowError::Malformed { line, .. } => *line,
                other => panic!("unexpected row error: {}", other),
            })
            .collect()
    }

    #[test]
    fn test_stray_quotes_are_malformed_rows() {
        let csv = "Text,Tags\nab\"c,+x\n\"closed\"trailing,+y\ngood,+z\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(malformed_lines(&parsed.errors), vec![2, 3]);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].task.text, "good");
        assert_eq!(parsed.records[0].line, 4);
    }

    #[test]
    fn test_unterminated_quote_does_not_swallow_following_rows() {
        let csv = "Text,Tags\n\"broken,+x\ngood,+z\nother,+w\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert_eq!(malformed_lines(&parsed.errors), vec![2]);
        let rows: Vec<(u64, &str)> = parsed.records.iter().map(|record| (record.line, record.task.text.as_str())).collect();
        assert_eq!(rows, vec![(3, "good"), (4, "other")]);
    }

    #[test]
    fn test_quoted_field_may_span_lines() {
        let csv = "Text,Tags\n\"two\nlines\",+x\r\nnext,+y\r\n";
        let parsed = parse_csv(csv.as_bytes()).unwrap();

        assert!(parsed.errors.is_empty());
        let rows: Vec<(u64, &str)> = parsed.records.iter().map(|record| (record.line, record.task.text.as_str())).collect();
        assert_eq!(rows, vec![(2, "two\nlines"), (4, "next")]);
        assert_eq!(parsed.records[0].task.tags, vec!["+x"]);
    }

    #[test]
    fn test_invalid_utf8_row_is_malformed() {
        let csv: &[u8] = b"Text\n\xff\xfe\nok\n";
        let parsed = parse_csv(csv).unwrap();

        assert_eq!(malformed_lines(&parsed.errors), vec![2]);
        assert_eq!(parsed.records[0].task.text, "ok");
    }

    #[test]
    fn test_bad_quoting_in_header() {
        let result = parse_csv("Te\"xt,Tags\nfoo,+x\n".as_bytes());
        assert!(matches!(result, Err(ImportError::Header(_))));
    }
}
