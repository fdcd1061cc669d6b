//! Todo item record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo item.
///
/// Generated once at creation and never reused; kept as an alias to make
/// semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// One task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable key for lookup, edit and delete.
    pub id: TodoId,
    /// Non-empty task text; the sole user-visible payload.
    pub title: String,
    /// Captured at creation and never changed afterwards, edits included.
    pub created_at: DateTime<Utc>,
    /// Time of the last creation or edit.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new item with a generated id; both timestamps are `now`.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_timestamps_match() {
        let item = TodoItem::new("water the plants");
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(item.title, "water the plants");
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        let a = TodoItem::new("a");
        let b = TodoItem::new("b");
        assert_ne!(a.id, b.id);
    }
}
