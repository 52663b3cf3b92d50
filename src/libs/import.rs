//! CSV import parsing.
//!
//! The header row is authoritative: columns are matched by name,
//! case-insensitively and in any order, and only `Text` is required. Every
//! data row becomes either an [`ImportRecord`] (possibly with field-level
//! [`ImportWarning`]s) or a [`RowError`]. Reconciling the records with a
//! store is handled by [`reconcile`](super::reconcile).
//!
//! Quoting is strict: a row with a stray or unbalanced quote is reported as
//! malformed and skipped, and parsing picks up again on the following line.

use super::error::{ImportError, ImportWarning, RowError};
use super::task::{parse_tags, Priority, Task};
use super::validation::{generate_uuid, is_valid_timestamp, is_valid_uuid, now_timestamp, validate_date};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A task read from one CSV row. `task.id` is left at 0; the reconciler
/// assigns the real id.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    pub line: u64,
    pub task: Task,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    pub records: Vec<ImportRecord>,
    pub warnings: Vec<ImportWarning>,
    pub errors: Vec<RowError>,
}

struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_header(header: &StringRecord) -> Self {
        Self(header.iter().enumerate().map(|(index, name)| (name.trim().to_lowercase(), index)).collect())
    }

    fn index(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    fn value<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.index(name).and_then(|index| record.get(index)).unwrap_or("")
    }
}

/// Opens and parses a CSV file.
pub fn parse_csv_file(path: &Path) -> Result<ParsedCsv, ImportError> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.to_path_buf()));
    }
    parse_csv(File::open(path)?)
}

/// A physical record cut from the raw input, before field decoding.
struct RawRecord<'a> {
    line: u64,
    bytes: &'a [u8],
    error: Option<&'static str>,
}

#[derive(Clone, Copy)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

struct Scanned {
    end: usize,
    next: usize,
    error: Option<&'static str>,
}

fn next_line_start(input: &[u8], from: usize) -> usize {
    input[from..].iter().position(|&b| b == b'\n').map_or(input.len(), |offset| from + offset + 1)
}

// Strict quoting: a quote may only open a field, close it, or be doubled
// inside it. After an error, scanning resumes on the next line.
fn scan_record(input: &[u8], start: usize) -> Scanned {
    let mut state = FieldState::Start;
    let mut i = start;

    while i < input.len() {
        let byte = input[i];
        state = match (state, byte) {
            (FieldState::Quoted, b'"') => FieldState::QuoteInQuoted,
            (FieldState::Quoted, _) => FieldState::Quoted,
            (FieldState::QuoteInQuoted, b'"') => FieldState::Quoted,
            (FieldState::Start | FieldState::Unquoted | FieldState::QuoteInQuoted, b',') => FieldState::Start,
            (FieldState::Start | FieldState::Unquoted | FieldState::QuoteInQuoted, b'\n') => {
                return Scanned {
                    end: i,
                    next: i + 1,
                    error: None,
                };
            }
            (FieldState::QuoteInQuoted, b'\r') if input.get(i + 1) == Some(&b'\n') => FieldState::QuoteInQuoted,
            (FieldState::QuoteInQuoted, _) => {
                let next = next_line_start(input, i);
                return Scanned {
                    end: next,
                    next,
                    error: Some("extraneous \" in quoted field"),
                };
            }
            (FieldState::Start, b'"') => FieldState::Quoted,
            (FieldState::Unquoted, b'"') => {
                let next = next_line_start(input, i);
                return Scanned {
                    end: next,
                    next,
                    error: Some("bare \" in non-quoted field"),
                };
            }
            (FieldState::Start | FieldState::Unquoted, _) => FieldState::Unquoted,
        };
        i += 1;
    }

    match state {
        FieldState::Quoted => {
            let next = next_line_start(input, start);
            Scanned {
                end: next,
                next,
                error: Some("quoted field is never closed"),
            }
        }
        _ => Scanned {
            end: input.len(),
            next: input.len(),
            error: None,
        },
    }
}

/// Cuts the input into records, skipping blank lines.
fn split_records(input: &[u8]) -> Vec<RawRecord<'_>> {
    let mut records = Vec::new();
    let mut pos = 0;
    let mut line = 1;

    while pos < input.len() {
        let Scanned { end, next, error } = scan_record(input, pos);
        let bytes = &input[pos..end];
        if error.is_some() || !matches!(bytes, b"" | b"\r") {
            records.push(RawRecord { line, bytes, error });
        }
        line += input[pos..next].iter().filter(|&&b| b == b'\n').count() as u64;
        pos = next;
    }

    records
}

fn decode(bytes: &[u8]) -> Result<StringRecord, csv::Error> {
    let mut rdr = ReaderBuilder::new().has_headers(false).flexible(true).trim(Trim::All).from_reader(bytes);
    let mut record = StringRecord::new();
    rdr.read_record(&mut record)?;
    Ok(record)
}

/// Parses CSV content. Fails only when the header is unreadable or lacks a
/// `Text` column; row-level problems, including bad quoting, are collected
/// in the result.
pub fn parse_csv<R: Read>(mut reader: R) -> Result<ParsedCsv, ImportError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut raw_records = split_records(&input).into_iter();
    let header = match raw_records.next() {
        Some(RawRecord { error: Some(reason), .. }) => return Err(ImportError::Header(reason.to_string())),
        Some(raw) => decode(raw.bytes).map_err(|err| ImportError::Header(err.to_string()))?,
        None => StringRecord::new(),
    };
    let columns = Columns::from_header(&header);
    if columns.index("text").is_none() {
        return Err(ImportError::MissingTextColumn);
    }

    let now = now_timestamp();
    let mut parsed = ParsedCsv::default();

    for raw in raw_records {
        let line = raw.line;
        let decoded = match raw.error {
            Some(reason) => Err(reason.to_string()),
            None => decode(raw.bytes).map_err(|err| err.to_string()),
        };
        let record = match decoded {
            Ok(record) => record,
            Err(reason) => {
                debug!(line, %reason, "malformed csv row");
                parsed.errors.push(RowError::Malformed { line, reason });
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        match parse_record(&record, &columns, line, &now, &mut parsed.warnings) {
            Some(task) => parsed.records.push(ImportRecord { line, task }),
            None => parsed.errors.push(RowError::EmptyText { line }),
        }
    }

    debug!(
        records = parsed.records.len(),
        warnings = parsed.warnings.len(),
        errors = parsed.errors.len(),
        "csv parsed"
    );
    Ok(parsed)
}

/// Builds a task from one row, pushing a warning for every field that had to
/// be corrected. Returns `None` when the text is empty.
fn parse_record(record: &StringRecord, columns: &Columns, line: u64, now: &str, warnings: &mut Vec<ImportWarning>) -> Option<Task> {
    let text = columns.value(record, "text");
    if text.is_empty() {
        return None;
    }

    let uuid = match columns.value(record, "uuid") {
        "" => generate_uuid(),
        value if is_valid_uuid(value) => value.to_lowercase(),
        value => {
            warnings.push(ImportWarning::InvalidUuid {
                line,
                value: value.to_string(),
            });
            generate_uuid()
        }
    };

    let done = matches!(columns.value(record, "done").to_lowercase().as_str(), "true" | "1");

    let priority = match columns.value(record, "priority") {
        "" => Priority::Unset,
        value => Priority::from_canonical(value).unwrap_or_else(|| {
            warnings.push(ImportWarning::InvalidPriority {
                line,
                value: value.to_lowercase(),
            });
            Priority::Unset
        }),
    };

    let due = match columns.value(record, "due") {
        value if validate_date(value) => value.to_string(),
        value => {
            warnings.push(ImportWarning::InvalidDue {
                line,
                value: value.to_string(),
            });
            String::new()
        }
    };

    let created = match columns.value(record, "created") {
        "" => now.to_string(),
        value if is_valid_timestamp(value) => value.to_string(),
        value => {
            warnings.push(ImportWarning::InvalidCreated {
                line,
                value: value.to_string(),
            });
            now.to_string()
        }
    };

    let updated = match columns.value(record, "updated") {
        "" => now.to_string(),
        value if is_valid_timestamp(value) => value.to_string(),
        value => {
            warnings.push(ImportWarning::InvalidUpdated {
                line,
                value: value.to_string(),
            });
            now.to_string()
        }
    };

    Some(Task {
        id: 0,
        uuid,
        text: text.to_string(),
        done,
        priority,
        due,
        tags: parse_tags(columns.value(record, "tags")),
        created,
        updated,
    })
}
