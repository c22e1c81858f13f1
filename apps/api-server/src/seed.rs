//! One-time startup seeding of sample posts.

use plank_core::domain::NewPost;
use plank_core::error::DomainError;

use crate::state::AppState;

const SAMPLE_POST_COUNT: u64 = 50;

/// Insert sample posts into an empty store. Skips seeding entirely when
/// any post already exists.
pub async fn load_sample_data(state: &AppState) -> Result<(), DomainError> {
    if state.service.count_posts().await? > 0 {
        tracing::info!("Existing posts found. Skipping sample data seeding.");
        return Ok(());
    }

    tracing::info!("Seeding sample posts...");

    for i in 1..=SAMPLE_POST_COUNT {
        let post = NewPost::new(
            format!("Sample post {i}"),
            format!(
                "This is the content of sample post {i}. \
                 Try both the infinite scroll and the pagination listing over this data."
            ),
            format!("author{}", i % 5 + 1),
        );
        state.service.create_post(post).await?;
    }

    tracing::info!("Sample data seeding complete: {} posts", SAMPLE_POST_COUNT);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn seeds_once_and_only_when_empty() {
        let state = AppState::in_memory();

        load_sample_data(&state).await.unwrap();
        assert_eq!(state.service.count_posts().await.unwrap(), SAMPLE_POST_COUNT);

        // A second run must not duplicate anything.
        load_sample_data(&state).await.unwrap();
        assert_eq!(state.service.count_posts().await.unwrap(), SAMPLE_POST_COUNT);
    }
}
