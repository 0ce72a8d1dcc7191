//! HTTP handlers and route configuration.

mod fallback;
mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
///
/// Known paths hit with an unrouted method fall through to the same 404 as
/// unknown paths.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/health")
                    .route(web::get().to(health::health_check))
                    .default_service(web::to(fallback::route_not_found)),
            )
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post))
                    .default_service(web::to(fallback::route_not_found)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::get_post))
                    .default_service(web::to(fallback::route_not_found)),
            )
            .default_service(web::to(fallback::route_not_found)),
    )
    .default_service(web::to(fallback::route_not_found));
}
