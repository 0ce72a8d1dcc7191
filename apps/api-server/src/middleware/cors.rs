//! CORS policy.

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware.
///
/// With a configured frontend origin only that origin is allowed (with
/// credentials); otherwise any origin is accepted. Only routed methods are
/// advertised.
pub fn cors(frontend_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .expose_headers(vec!["x-request-id"])
        .max_age(3600);

    match frontend_origin {
        Some(origin) => cors.allowed_origin(origin).supports_credentials(),
        None => cors.allow_any_origin(),
    }
}
