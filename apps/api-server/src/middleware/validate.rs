//! Field validation for create requests, run as an extractor before the handler.

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::JsonPayloadError, web};
use futures::future::LocalBoxFuture;
use serde_json::Value;

use posts_core::domain::NewPost;
use posts_core::validation::validate_new_post;

use super::error::AppError;

/// A create-post body that passed field validation.
///
/// Only `title`, `body` and `user_id` survive; everything else the client
/// sent is discarded here.
#[derive(Debug)]
pub struct ValidatedPost(pub NewPost);

impl FromRequest for ValidatedPost {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<Value>::from_request(req, payload);

        Box::pin(async move {
            let body = match json.await {
                Ok(web::Json(body)) => body,
                Err(err) => {
                    let reason = payload_error_message(err.as_error::<JsonPayloadError>());
                    tracing::warn!(error = %err, "Rejected create-post body");
                    return Err(AppError::Validation(reason.to_string()));
                }
            };

            match validate_new_post(&body) {
                Ok(post) => Ok(ValidatedPost(post)),
                Err(err) => {
                    tracing::warn!(reason = %err, "Create-post validation failed");
                    Err(err.into())
                }
            }
        })
    }
}

fn payload_error_message(err: Option<&JsonPayloadError>) -> &'static str {
    match err {
        Some(JsonPayloadError::OverflowKnownLength { .. }) | Some(JsonPayloadError::Overflow { .. }) => {
            "Request body too large"
        }
        Some(JsonPayloadError::ContentType) => "Content-Type must be application/json",
        _ => "Invalid JSON body",
    }
}
