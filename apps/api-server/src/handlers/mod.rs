//! HTTP handlers and route configuration.

mod boards;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/boards")
                    .route("", web::get().to(boards::list_boards))
                    .route("", web::post().to(boards::create_board))
                    // registered before /{id} so "count" never parses as an id
                    .route("/count", web::get().to(boards::count_boards))
                    .route("/{id}", web::get().to(boards::get_board)),
            ),
    );
}
