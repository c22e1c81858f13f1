//! Post service - orchestrates create/read/count/list over the
//! repository port.

use std::sync::Arc;

use crate::domain::{NewPost, Post};
use crate::error::DomainError;
use crate::listing::{Listing, LoadStrategy};
use crate::ports::PostRepository;

/// Application service for bulletin-board posts.
///
/// Validation happens at the API boundary; this service trusts its
/// caller and only enforces domain rules (strategy resolution,
/// existence checks).
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// List posts with the named strategy.
    pub async fn list_posts(
        &self,
        strategy: &str,
        page: u64,
        size: u64,
    ) -> Result<Listing, DomainError> {
        let strategy = LoadStrategy::resolve(strategy)?;
        let listing = strategy.load_boards(self.posts.as_ref(), page, size).await?;
        Ok(listing)
    }

    /// Create a new post. Id and timestamp are assigned by the storage
    /// layer at insert.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post, DomainError> {
        let post = self.posts.insert(new_post).await?;
        Ok(post)
    }

    /// Fetch a single post by id.
    pub async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound(id))
    }

    /// Total number of persisted posts.
    pub async fn count_posts(&self) -> Result<u64, DomainError> {
        Ok(self.posts.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::PostPage;

    /// Minimal in-process repository for exercising the service.
    #[derive(Default)]
    struct TestRepo {
        posts: Mutex<Vec<Post>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl PostRepository for TestRepo {
        async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
            let post = Post {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                title: new_post.title,
                content: new_post.content,
                author: new_post.author,
                created_at: Utc::now(),
            };
            self.posts.lock().unwrap().push(post.clone());
            Ok(post)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned())
        }

        async fn find_page(&self, page: u64, size: u64) -> Result<PostPage, RepoError> {
            let mut all = self.posts.lock().unwrap().clone();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

            let total_elements = all.len() as u64;
            let total_pages = total_elements.div_ceil(size);
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
            Ok(self.posts.lock().unwrap().len() as u64)
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(TestRepo::default()))
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let svc = service();

        let created = svc
            .create_post(NewPost::new("First post", "Hello board", "alice"))
            .await
            .unwrap();

        let fetched = svc.get_post(created.id).await.unwrap();
        assert_eq!(fetched.title, "First post");
        assert_eq!(fetched.content, "Hello board");
        assert_eq!(fetched.author, "alice");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn get_unknown_id_fails_not_found() {
        let svc = service();

        match svc.get_post(999).await {
            Err(DomainError::NotFound(id)) => assert_eq!(id, 999),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn pagination_on_empty_store() {
        let svc = service();

        let listing = svc.list_posts("pagination", 0, 10).await.unwrap();
        assert!(listing.posts.is_empty());
        assert!(!listing.has_next);
        assert!(!listing.has_previous);
        assert_eq!(listing.total_elements, 0);
        assert_eq!(listing.total_pages, 0);
        assert_eq!(listing.strategy, "pagination");
    }

    #[tokio::test]
    async fn unknown_strategy_is_rejected() {
        let svc = service();

        match svc.list_posts("random", 0, 10).await {
            Err(DomainError::UnsupportedStrategy { name, .. }) => assert_eq!(name, "random"),
            other => panic!("expected UnsupportedStrategy, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn pagination_over_fifteen_posts() {
        let svc = service();
        for i in 1..=15 {
            svc.create_post(NewPost::new(format!("post {i}"), "body", "bob"))
                .await
                .unwrap();
        }

        let first = svc.list_posts("pagination", 0, 10).await.unwrap();
        assert_eq!(first.posts.len(), 10);
        assert!(first.has_next);
        assert!(!first.has_previous);
        assert_eq!(first.total_elements, 15);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.current_page, 0);

        let second = svc.list_posts("pagination", 1, 10).await.unwrap();
        assert_eq!(second.posts.len(), 5);
        assert!(!second.has_next);
        assert!(second.has_previous);
        assert_eq!(second.current_page, 1);
    }

    #[tokio::test]
    async fn infinite_reports_continuation_only() {
        let svc = service();
        for i in 1..=15 {
            svc.create_post(NewPost::new(format!("post {i}"), "body", "carol"))
                .await
                .unwrap();
        }

        let first = svc.list_posts("infinite", 0, 10).await.unwrap();
        assert_eq!(first.posts.len(), 10);
        assert!(first.has_next);
        assert!(!first.has_previous);
        assert_eq!(first.total_elements, 15);
        assert_eq!(first.total_pages, 0);
        assert_eq!(first.strategy, "infinite");

        let second = svc.list_posts("infinite", 1, 10).await.unwrap();
        assert_eq!(second.posts.len(), 5);
        assert!(!second.has_next);
        assert!(!second.has_previous);
    }

    #[tokio::test]
    async fn count_tracks_successful_creates() {
        let svc = service();
        assert_eq!(svc.count_posts().await.unwrap(), 0);

        for i in 0..3 {
            svc.create_post(NewPost::new(format!("t{i}"), "c", "dave"))
                .await
                .unwrap();
        }
        assert_eq!(svc.count_posts().await.unwrap(), 3);
    }
}
