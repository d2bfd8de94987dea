//! Core types for the todo store.

use crate::error::{Result, TodoError};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a todo.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(pub u64);

impl TodoId {
    /// The id handed to the first todo of an empty collection.
    pub const FIRST: TodoId = TodoId(1);

    /// The following id, or `None` once `u64::MAX` is reached.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(TodoId)
    }
}

impl fmt::Debug for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TodoId({})", self.0)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse().map(TodoId)
    }
}

/// Creation time of a todo, kept at millisecond precision.
///
/// Serialized as an RFC 3339 string such as `2026-10-16T09:30:00.123Z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Current time.
    pub fn now() -> Self {
        Timestamp(Utc::now().trunc_subsecs(3))
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_rfc3339())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Timestamp(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

/// A single todo in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier (assigned by the store).
    pub id: TodoId,

    /// Trimmed, non-empty description.
    pub text: String,

    /// Whether the todo has been checked off.
    #[serde(default)]
    pub completed: bool,

    /// When the todo was created. Never changes afterwards.
    pub created_at: Timestamp,
}

impl Todo {
    /// Build a fresh, uncompleted todo. `text` must already be normalized.
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Timestamp::now(),
        }
    }
}

/// Trim `raw` and reject it if nothing is left.
pub fn normalize_text(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoError::Validation);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_id_parse() {
        assert_eq!("42".parse::<TodoId>().unwrap(), TodoId(42));
        assert!("abc".parse::<TodoId>().is_err());
        assert!("-1".parse::<TodoId>().is_err());
        assert_eq!(TodoId::FIRST.next(), Some(TodoId(2)));
        assert_eq!(TodoId(u64::MAX).next(), None);
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Buy milk  ").unwrap(), "Buy milk");
        assert!(matches!(normalize_text(""), Err(TodoError::Validation)));
        assert!(matches!(normalize_text(" \t\n "), Err(TodoError::Validation)));
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo::new(TodoId(7), "Write tests".into());
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["text"], "Write tests");
        assert_eq!(value["completed"], false);

        let created = value["createdAt"].as_str().unwrap();
        assert!(created.ends_with('Z'));
        assert_eq!(created, todo.created_at.to_rfc3339());
    }

    #[test]
    fn test_todo_from_browser_json() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":3,"text":"Old entry","completed":true,"createdAt":"2024-01-05T10:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(todo.id, TodoId(3));
        assert!(todo.completed);
        assert_eq!(todo.created_at.to_rfc3339(), "2024-01-05T10:00:00.000Z");
    }
}
