use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// One page of posts, newest first, plus the totals the listing
/// strategies need for continuation decisions.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Post repository port.
///
/// There is deliberately no update or delete: posts are write-once.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post. The storage layer assigns the id and the
    /// creation timestamp and returns the completed entity.
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Fetch one page of posts ordered by creation time descending
    /// (id descending breaks ties).
    async fn find_page(&self, page: u64, size: u64) -> Result<PostPage, RepoError>;

    /// Total number of persisted posts.
    async fn count(&self) -> Result<u64, RepoError>;
}
