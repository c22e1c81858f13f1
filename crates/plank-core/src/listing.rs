//! Listing strategies - the two interchangeable ways of producing a
//! page of posts.
//!
//! The variant set is fixed and small, so the strategies are a plain
//! enum dispatched with a match rather than a name-to-object registry.

use crate::domain::Post;
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Names accepted by [`LoadStrategy::resolve`], for error messages.
pub const SUPPORTED_STRATEGIES: &str = "infinite, pagination";

/// Result of one listing request. Computed per request, never stored.
#[derive(Debug, Clone)]
pub struct Listing {
    pub posts: Vec<Post>,
    pub has_next: bool,
    pub has_previous: bool,
    pub total_elements: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub strategy: &'static str,
}

/// A listing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Forward-only feed: only continuation (`has_next`) is meaningful.
    Infinite,
    /// Offset pagination: exposes absolute position and page totals.
    Pagination,
}

impl LoadStrategy {
    /// Resolve a strategy by name. Exact, case-sensitive match only.
    pub fn resolve(name: &str) -> Result<Self, DomainError> {
        match name {
            "infinite" => Ok(Self::Infinite),
            "pagination" => Ok(Self::Pagination),
            _ => Err(DomainError::UnsupportedStrategy {
                name: name.to_owned(),
                supported: SUPPORTED_STRATEGIES,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Infinite => "infinite",
            Self::Pagination => "pagination",
        }
    }

    /// Load one page of posts through the repository.
    ///
    /// Both variants issue the same newest-first page query; they differ
    /// only in which metadata fields they consider meaningful.
    pub async fn load_boards(
        &self,
        posts: &dyn PostRepository,
        page: u64,
        size: u64,
    ) -> Result<Listing, RepoError> {
        let fetched = posts.find_page(page, size).await?;

        let listing = match self {
            Self::Pagination => Listing {
                has_next: page
                    .checked_add(1)
                    .is_some_and(|next| next < fetched.total_pages),
                has_previous: page > 0,
                total_elements: fetched.total_elements,
                total_pages: fetched.total_pages,
                current_page: page,
                strategy: self.name(),
                posts: fetched.posts,
            },
            // A pure forward scroll has no notion of "previous" and no
            // use for a page total, only whether more items remain.
            // Checked math: an absurd page stays an empty page, never a
            // wrapped offset.
            Self::Infinite => Listing {
                has_next: page
                    .checked_add(1)
                    .and_then(|next| next.checked_mul(size))
                    .is_some_and(|consumed| consumed < fetched.total_elements),
                has_previous: false,
                total_elements: fetched.total_elements,
                total_pages: 0,
                current_page: page,
                strategy: self.name(),
                posts: fetched.posts,
            },
        };

        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::NewPost;
    use crate::ports::PostPage;

    /// Repository stub reporting 15 stored posts but returning none.
    struct CountOnlyRepo;

    #[async_trait]
    impl PostRepository for CountOnlyRepo {
        async fn insert(&self, _new_post: NewPost) -> Result<Post, RepoError> {
            unreachable!("listing never inserts")
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Post>, RepoError> {
            unreachable!("listing never fetches by id")
        }

        async fn find_page(&self, _page: u64, _size: u64) -> Result<PostPage, RepoError> {
            Ok(PostPage {
                posts: Vec::new(),
                total_elements: 15,
                total_pages: 2,
            })
        }

        async fn count(&self) -> Result<u64, RepoError> {
            Ok(15)
        }
    }

    #[tokio::test]
    async fn infinite_huge_page_has_no_next() {
        let listing = LoadStrategy::Infinite
            .load_boards(&CountOnlyRepo, i64::MAX as u64, 100)
            .await
            .unwrap();

        assert!(!listing.has_next);
        assert_eq!(listing.total_elements, 15);
    }

    #[tokio::test]
    async fn pagination_huge_page_has_no_next() {
        let listing = LoadStrategy::Pagination
            .load_boards(&CountOnlyRepo, u64::MAX, 100)
            .await
            .unwrap();

        assert!(!listing.has_next);
        assert!(listing.has_previous);
    }

    #[test]
    fn resolve_known_names() {
        assert_eq!(LoadStrategy::resolve("infinite").unwrap(), LoadStrategy::Infinite);
        assert_eq!(
            LoadStrategy::resolve("pagination").unwrap(),
            LoadStrategy::Pagination
        );
    }

    #[test]
    fn resolve_is_case_sensitive() {
        for name in ["Pagination", "INFINITE", "random", ""] {
            match LoadStrategy::resolve(name) {
                Err(DomainError::UnsupportedStrategy { name: rejected, supported }) => {
                    assert_eq!(rejected, name);
                    assert_eq!(supported, SUPPORTED_STRATEGIES);
                }
                other => panic!("expected UnsupportedStrategy, got {other:?}"),
            }
        }
    }
}
