//! Fallback for unmatched routes and methods.

use actix_web::{HttpRequest, HttpResponse};

use posts_shared::ErrorResponse;

/// Every route the server answers.
pub const AVAILABLE_ROUTES: [&str; 4] = [
    "GET /api/health",
    "GET /api/posts",
    "POST /api/posts",
    "GET /api/posts/:id",
];

pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    tracing::warn!(method = %req.method(), path = %req.path(), "Route not found");

    HttpResponse::NotFound().json(ErrorResponse::route_not_found(AVAILABLE_ROUTES))
}
