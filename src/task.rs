//! Task entity and priority levels.
//!
//! A `Task` is the shared currency between the storage engine and the
//! presentation layer. It carries no behavior beyond its data shape and
//! its single-line rendering.

use chrono::Local;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Priority level of a task.
///
/// Stored as a bare integer (1-3) in both backends, so serde maps the enum
/// to/from that integer rather than a string name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// The integer stored in the backends.
    pub fn as_u8(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Parse the 1-3 integer form. `None` for anything out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            _ => None,
        }
    }

    /// Human-readable label with its arrow glyph.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "⬇ low",
            Priority::Medium => "↔ medium",
            Priority::High => "⬆ high",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Priority::from_u8(value).ok_or_else(|| format!("priority must be 1, 2, or 3, got {}", value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Priority::from_u8(value)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Unsigned(value as u64), &"1, 2, or 3"))
    }
}

/// A single task record.
///
/// `id` is 0 until the storage engine assigns one; `id` and `created_at`
/// never change after insertion. Everything else is mutable via update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub due_date: Option<String>,
    pub priority: Priority,
    pub category: Option<String>,
}

impl Task {
    /// Create an unassigned task with the creation timestamp stamped now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: None,
            completed: false,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            due_date: None,
            priority: Priority::Low,
            category: None,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "✓" } else { "✗" };
        write!(f, "{:03}. [{}] {}", self.id, status, self.title)?;
        if let Some(due) = &self.due_date {
            write!(f, " | 📅 {}", due)?;
        }
        if let Some(category) = &self.category {
            write!(f, " | 🏷 {}", category)?;
        }
        write!(f, " | {}", self.priority.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            id: 7,
            title: "Team meeting".to_string(),
            description: Some("Quarterly planning".to_string()),
            completed: false,
            created_at: "2026-08-01 09:30:00".to_string(),
            due_date: Some("2026-08-15".to_string()),
            priority: Priority::High,
            category: Some("work".to_string()),
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.id, 0);
        assert_eq!(task.title, "Buy milk");
        assert!(task.description.is_none());
        assert!(!task.completed);
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, Priority::Low);
        assert!(task.category.is_none());
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn test_priority_integer_mapping() {
        assert_eq!(Priority::Low.as_u8(), 1);
        assert_eq!(Priority::Medium.as_u8(), 2);
        assert_eq!(Priority::High.as_u8(), 3);

        assert_eq!(Priority::from_u8(1), Some(Priority::Low));
        assert_eq!(Priority::from_u8(3), Some(Priority::High));
        assert_eq!(Priority::from_u8(0), None);
        assert_eq!(Priority::from_u8(4), None);
    }

    #[test]
    fn test_priority_try_from_rejects_out_of_range() {
        assert!(Priority::try_from(2).is_ok());
        assert!(Priority::try_from(5).is_err());
    }

    #[test]
    fn test_serde_round_trip_preserves_every_field() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_serde_flat_keys_and_integer_priority() {
        let task = sample_task();
        let value = serde_json::to_value(&task).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "category",
                "completed",
                "created_at",
                "description",
                "due_date",
                "id",
                "priority",
                "title"
            ]
        );
        assert_eq!(value["priority"], serde_json::json!(3));
        assert_eq!(value["id"], serde_json::json!(7));
    }

    #[test]
    fn test_deserialize_rejects_bad_priority() {
        let json = r#"{"id":1,"title":"x","description":null,"completed":false,
                       "created_at":"2026-01-01 00:00:00","due_date":null,
                       "priority":9,"category":null}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_display_single_line() {
        let task = sample_task();
        let line = task.to_string();
        assert_eq!(line, "007. [✗] Team meeting | 📅 2026-08-15 | 🏷 work | ⬆ high");
    }

    #[test]
    fn test_display_omits_absent_fields() {
        let mut task = Task::new("Buy milk");
        task.id = 1;
        task.completed = true;
        assert_eq!(task.to_string(), "001. [✓] Buy milk | ⬇ low");
    }
}
