//! Application state - shared across all handlers.

use std::sync::Arc;

use plank_core::PostService;
use plank_core::ports::PostRepository;
use plank_infra::MemoryPostRepository;
use plank_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use plank_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub service: PostService,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(config) = db_config {
                match plank_infra::database::connect(config).await {
                    Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(MemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(MemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(MemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self {
            service: PostService::new(posts),
        }
    }

    /// State backed by the in-memory repository, for tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            service: PostService::new(Arc::new(MemoryPostRepository::new())),
        }
    }
}
