//! In-memory post repository.
//!
//! Backs the server when no database is configured, and doubles as the
//! repository used by handler tests.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use plank_core::domain::{NewPost, Post};
use plank_core::error::RepoError;
use plank_core::ports::{PostPage, PostRepository};

/// Post repository holding everything in process memory.
#[derive(Default)]
pub struct MemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicI64,
}

impl MemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            created_at: Utc::now(),
        };

        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_page(&self, page: u64, size: u64) -> Result<PostPage, RepoError> {
        let mut all = self.posts.read().await.clone();
        // Newest first; id breaks ties from burst inserts.
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total_elements = all.len() as u64;
        let total_pages = total_elements.div_ceil(size);
        // Checked offset: a page past the end yields an empty page
        // instead of a wrapped index.
        let offset = page
            .checked_mul(size)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);
        let posts = all
            .into_iter()
            .skip(offset)
            .take(size as usize)
            .collect();

        Ok(PostPage {
            posts,
            total_elements,
            total_pages,
        })
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(n: usize) -> MemoryPostRepository {
        let repo = MemoryPostRepository::new();
        for i in 1..=n {
            repo.insert(NewPost::new(format!("post {i}"), "body", "tester"))
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = MemoryPostRepository::new();

        let first = repo.insert(NewPost::new("a", "b", "c")).await.unwrap();
        let second = repo.insert(NewPost::new("d", "e", "f")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn find_page_is_newest_first() {
        let repo = seeded(15).await;

        let page = repo.find_page(0, 10).await.unwrap();
        assert_eq!(page.posts.len(), 10);
        assert_eq!(page.total_elements, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.posts[0].title, "post 15");

        let rest = repo.find_page(1, 10).await.unwrap();
        assert_eq!(rest.posts.len(), 5);
        assert_eq!(rest.posts[4].title, "post 1");
    }

    #[tokio::test]
    async fn find_page_on_empty_store() {
        let repo = MemoryPostRepository::new();

        let page = repo.find_page(0, 10).await.unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn find_page_past_the_end_is_empty() {
        let repo = seeded(3).await;

        let page = repo.find_page(5, 10).await.unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total_elements, 3);
    }

    #[tokio::test]
    async fn find_page_with_huge_page_number_is_empty() {
        let repo = seeded(3).await;

        let page = repo.find_page(u64::MAX, 100).await.unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total_elements, 3);
    }
}
