//! Health check endpoint.

use actix_web::HttpResponse;

use posts_shared::dto::HealthResponse;

/// Health check endpoint - returns server status without touching the store.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        success: true,
        message: "Posts API is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(response)
}
