//! Task entity and priority levels.
//!
//! A [`Task`] is a passive record: the [`Store`](crate::libs::store::Store)
//! assigns its identifiers and timestamps, the filter engine reads it, and the
//! CSV codec converts it to and from rows. Field names match the persisted
//! JSON layout exactly.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Priority of a task. Persisted and exported as the canonical lowercase
/// string, with `Unset` written as an empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    #[default]
    Unset,
    Low,
    Medium,
    High,
}

impl Priority {
    /// Normalizes a free-form priority supplied on the command line.
    ///
    /// Accepts the canonical names in any case plus short and French aliases
    /// (`h`, `haute`, `m`, `moyenne`, `l`, `basse`). An empty string maps to
    /// `Some(Unset)`; anything unrecognized yields `None`.
    pub fn from_alias(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "" => Some(Priority::Unset),
            "h" | "high" | "haute" => Some(Priority::High),
            "m" | "medium" | "moyenne" => Some(Priority::Medium),
            "l" | "low" | "basse" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Parses a canonical name, case-insensitively. Used for CSV fields,
    /// where aliases are not accepted.
    pub fn from_canonical(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "" => Some(Priority::Unset),
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Unset => "",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Sort weight: high=3, medium=2, low=1, unset=0.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Unset => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    pub fn is_set(&self) -> bool {
        *self != Priority::Unset
    }
}

// Unknown values in a persisted file degrade to `Unset` instead of
// invalidating the whole store.
impl From<String> for Priority {
    fn from(value: String) -> Self {
        Priority::from_canonical(&value).unwrap_or_default()
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due: String,
    #[serde(default, deserialize_with = "nullable_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
}

impl Task {
    /// Tags beginning with `+`.
    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|tag| tag.strip_prefix('+'))
    }

    /// Tags beginning with `@`.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().filter_map(|tag| tag.strip_prefix('@'))
    }
}

/// True for tokens usable as tags: `+project` or `@context`.
pub fn is_tag(token: &str) -> bool {
    token.starts_with('+') || token.starts_with('@')
}

/// Splits a whitespace-separated tag string, keeping only `+`/`@` tokens in
/// their original order.
pub fn parse_tags(value: &str) -> Vec<String> {
    value.split_whitespace().filter(|token| is_tag(token)).map(str::to_string).collect()
}

// Older store files wrote `"tags": null` for tasks without tags.
fn nullable_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Criteria for the `list` view. Empty strings and `None` disable a filter.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub include_done: bool,
    pub project: String,
    pub context: String,
    pub priority: Option<Priority>,
}
