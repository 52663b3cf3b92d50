//! Field validation and timestamp helpers shared by the store, the CSV codec
//! and the command layer.

use chrono::{Local, NaiveDate, NaiveDateTime};
use uuid::{Uuid, Variant};

/// Format of `created`/`updated` stamps written by the store.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layouts accepted from imported CSV files. `#` stands for a digit.
const TIMESTAMP_SHAPES: [(&str, &str); 4] = [
    ("####-##-## ##:##:##", "%Y-%m-%d %H:%M:%S"),
    ("####-##-##T##:##:##", "%Y-%m-%dT%H:%M:%S"),
    ("####-##-## ##:##", "%Y-%m-%d %H:%M"),
    ("####-##-##T##:##", "%Y-%m-%dT%H:%M"),
];

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

// chrono accepts unpadded fields, so the layout is checked first.
fn has_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'#' => c.is_ascii_digit(),
            _ => c == s,
        })
}

/// Validates a due date. The empty string means "unset" and is valid.
///
/// ```
/// use todo::libs::validation::validate_date;
///
/// assert!(validate_date(""));
/// assert!(validate_date("2024-02-29"));
/// assert!(!validate_date("2025-02-29"));
/// ```
pub fn validate_date(value: &str) -> bool {
    value.is_empty() || parse_date(value).is_some()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_shape(value, "####-##-##") {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// True for a hyphenated version-4 UUID (RFC 4122 variant), in any case.
pub fn is_valid_uuid(value: &str) -> bool {
    if value.len() != 36 {
        return false;
    }
    match Uuid::try_parse(value) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

/// True when the value matches one of the accepted import timestamp layouts.
pub fn is_valid_timestamp(value: &str) -> bool {
    TIMESTAMP_SHAPES
        .iter()
        .any(|(shape, format)| has_shape(value, shape) && NaiveDateTime::parse_from_str(value, format).is_ok())
}

/// Parses a stamp in the store's own `YYYY-MM-DD HH:MM:SS` layout.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if !has_shape(value, TIMESTAMP_SHAPES[0].0) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// True when `candidate` is strictly later than `existing`. Either side
/// failing to parse counts as "not newer".
pub fn is_newer(candidate: &str, existing: &str) -> bool {
    match (parse_timestamp(candidate), parse_timestamp(existing)) {
        (Some(candidate), Some(existing)) => candidate > existing,
        _ => false,
    }
}
