//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of posts currently stored; doubles as a storage probe.
    pub posts: u64,
    pub timestamp: String,
}

/// Health check endpoint - reports server status and whether the post
/// store answers.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, posts) = match state.service.count_posts().await {
        Ok(count) => ("ok", count),
        Err(e) => {
            tracing::warn!("Health check could not reach the post store: {}", e);
            ("degraded", 0)
        }
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        posts,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use plank_core::domain::NewPost;

    use crate::handlers;
    use crate::state::AppState;

    #[actix_web::test]
    async fn health_reports_post_count() {
        let state = AppState::in_memory();
        state
            .service
            .create_post(NewPost::new("up", "running", "ops"))
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(handlers::configure_routes),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 1);
        assert!(body["version"].is_string());
    }
}
