//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum title length accepted at the API boundary.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum author length accepted at the API boundary.
pub const MAX_AUTHOR_LEN: usize = 50;

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// A single post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// One page of posts plus listing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub boards: Vec<PostSummary>,
    pub has_next: bool,
    pub has_previous: bool,
    pub total_elements: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub strategy: String,
}
