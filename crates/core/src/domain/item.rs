// Item Domain Model

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for `created_at` in human-readable output
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Item ID (positive, unique within a document)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item Entity - the only persisted record.
///
/// Serialized as `{"id": 1, "content": "...", "created_at": "<RFC 3339>"}`.
/// Unknown fields are rejected so a hand-edited document fails at load time
/// instead of on first use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Create a new item
    ///
    /// # Arguments
    ///
    /// * `id` - Allocated id (injected, not generated here)
    /// * `content` - Item text
    /// * `created_at` - Creation timestamp (injected, not system time)
    pub fn new(id: ItemId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }

    /// `created_at` rendered in local time
    pub fn formatted_created_at(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format(DISPLAY_TIME_FORMAT)
            .to_string()
    }
}

/// Human format: `#<id> (<timestamp>) <content>`
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} ({}) {}",
            self.id,
            self.formatted_created_at(),
            self.content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Item {
        Item::new(
            ItemId::new(7),
            "buy milk",
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["id"], 7);
        assert_eq!(obj["content"], "buy milk");
        assert!(obj["created_at"].as_str().unwrap().starts_with("2024-03-01T12:30:00"));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let raw = r#"{"id": 1, "content": "x", "created_at": "2024-03-01T12:30:00Z", "extra": 1}"#;
        assert!(serde_json::from_str::<Item>(raw).is_err());
    }

    #[test]
    fn test_rejects_bad_timestamp() {
        let raw = r#"{"id": 1, "content": "x", "created_at": "yesterday"}"#;
        assert!(serde_json::from_str::<Item>(raw).is_err());
    }

    #[test]
    fn test_rejects_negative_id() {
        let raw = r#"{"id": -3, "content": "x", "created_at": "2024-03-01T12:30:00Z"}"#;
        assert!(serde_json::from_str::<Item>(raw).is_err());
    }

    #[test]
    fn test_display_format() {
        let item = sample();
        let line = item.to_string();

        assert!(line.starts_with("#7 ("));
        assert!(line.ends_with(") buy milk"));
        assert!(line.contains(&item.formatted_created_at()));
    }
}
