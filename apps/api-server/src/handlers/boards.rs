//! Bulletin-board endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use plank_core::domain::{NewPost, Post};
use plank_core::listing::Listing;
use plank_shared::dto::{
    CreatePostRequest, ListingResponse, MAX_AUTHOR_LEN, MAX_TITLE_LEN, PostSummary,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListBoardsQuery {
    strategy: String,
    page: i64,
    size: i64,
}

impl Default for ListBoardsQuery {
    fn default() -> Self {
        Self {
            strategy: "infinite".to_string(),
            page: 0,
            size: 10,
        }
    }
}

/// GET /api/boards?strategy=&page=&size=
pub async fn list_boards(
    state: web::Data<AppState>,
    query: web::Query<ListBoardsQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();

    if q.page < 0 {
        return Err(AppError::Validation("page must be 0 or greater".to_string()));
    }
    if !(1..=100).contains(&q.size) {
        return Err(AppError::Validation(
            "size must be between 1 and 100".to_string(),
        ));
    }

    tracing::info!(strategy = %q.strategy, page = q.page, size = q.size, "Listing boards");

    let listing = state
        .service
        .list_posts(&q.strategy, q.page as u64, q.size as u64)
        .await?;

    Ok(HttpResponse::Ok().json(to_listing_response(listing)))
}

/// POST /api/boards
pub async fn create_board(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_create(&req)?;

    tracing::info!(title = %req.title, author = %req.author, "Creating board post");

    let post = state
        .service
        .create_post(NewPost::new(req.title, req.content, req.author))
        .await?;

    tracing::info!(id = post.id, "Board post created");

    Ok(HttpResponse::Created().json(to_summary(post)))
}

/// GET /api/boards/{id}
pub async fn get_board(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.service.get_post(id).await?;

    Ok(HttpResponse::Ok().json(to_summary(post)))
}

/// GET /api/boards/count
pub async fn count_boards(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.service.count_posts().await?;

    Ok(HttpResponse::Ok().json(count))
}

fn validate_create(req: &CreatePostRequest) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if req.title.trim().is_empty() {
        errors.push("title is required".to_string());
    } else if req.title.chars().count() > MAX_TITLE_LEN {
        errors.push(format!("title must not exceed {MAX_TITLE_LEN} characters"));
    }
    if req.content.trim().is_empty() {
        errors.push("content is required".to_string());
    }
    if req.author.trim().is_empty() {
        errors.push("author is required".to_string());
    } else if req.author.chars().count() > MAX_AUTHOR_LEN {
        errors.push(format!("author must not exceed {MAX_AUTHOR_LEN} characters"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors.join(", ")))
    }
}

fn to_summary(post: Post) -> PostSummary {
    PostSummary {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        created_at: post.created_at,
    }
}

fn to_listing_response(listing: Listing) -> ListingResponse {
    ListingResponse {
        boards: listing.posts.into_iter().map(to_summary).collect(),
        has_next: listing.has_next,
        has_previous: listing.has_previous,
        total_elements: listing.total_elements,
        total_pages: listing.total_pages,
        current_page: listing.current_page,
        strategy: listing.strategy.to_string(),
    }
}
