use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single bulletin-board entry.
///
/// The id and creation timestamp are assigned by the storage layer at
/// insert time and never change afterwards. Posts are never updated or
/// deleted through any exposed operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Fields for a post that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }
}
