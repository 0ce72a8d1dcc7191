//! Error handling - the single place failures become JSON envelopes.
//!
//! Handlers return [`AppError`]. [`ErrorEnvelope`] wraps the whole app and
//! re-renders every error response (ours and the framework's) with the
//! configured detail policy, so clients never see plain-text or HTML errors.

use actix_web::{
    Error, HttpMessage, HttpResponse, ResponseError,
    body::{BoxBody, MessageBody},
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use std::fmt;
use std::future::{Future, Ready, ready};
use std::pin::Pin;

use posts_core::{RepoError, ValidationError};
use posts_shared::ErrorResponse;

use crate::observability::RequestId;

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing client input. The message is the client-facing error.
    Validation(String),
    NotFound(String),
    /// The store answered with an error; its message is always echoed.
    Store(String),
    /// The store could not be reached.
    Unreachable(String),
    Unauthorized(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Store(msg) => write!(f, "Database error: {}", msg),
            AppError::Unreachable(msg) => write!(f, "Store unreachable: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Build the envelope for this error.
    ///
    /// `expose_details` decides whether the underlying message of
    /// unexpected failures is included as `message`.
    pub fn to_envelope(&self, expose_details: bool) -> ErrorResponse {
        let (envelope, hidden) = match self {
            AppError::Validation(msg) => (ErrorResponse::new(msg.as_str()), None),
            AppError::NotFound(msg) => (ErrorResponse::new(msg.as_str()), None),
            AppError::Store(details) => (ErrorResponse::database_error(details.as_str()), None),
            AppError::Unreachable(msg) => (ErrorResponse::service_unavailable(), Some(msg)),
            AppError::Unauthorized(msg) => (ErrorResponse::unauthorized(), Some(msg)),
            AppError::Internal(msg) => (ErrorResponse::internal_error(), Some(msg)),
        };

        match hidden {
            Some(msg) if expose_details => envelope.with_message(msg.as_str()),
            _ => envelope,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Production-safe rendering; ErrorEnvelope adds details when allowed.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_envelope(false))
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Post not found".to_string()),
            RepoError::Query { code, message } => {
                tracing::error!(code = ?code, "Database query error: {}", message);
                AppError::Store(message)
            }
            RepoError::Unreachable(msg) => {
                tracing::error!("Database unreachable: {}", msg);
                AppError::Unreachable(msg)
            }
            RepoError::Decode(msg) => {
                tracing::error!("Unexpected database response: {}", msg);
                AppError::Store(msg)
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Middleware that turns every error response into an [`ErrorResponse`] envelope.
pub struct ErrorEnvelope {
    expose_details: bool,
}

impl ErrorEnvelope {
    pub fn new(expose_details: bool) -> Self {
        Self { expose_details }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorEnvelope
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = ErrorEnvelopeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorEnvelopeService {
            service,
            expose_details: self.expose_details,
        }))
    }
}

pub struct ErrorEnvelopeService<S> {
    service: S,
    expose_details: bool,
}

impl<S, B> Service<ServiceRequest> for ErrorEnvelopeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let expose_details = self.expose_details;
        // The request must not be cloned before routing; the router needs sole ownership.
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?.map_into_boxed_body();
            Ok(render(res, expose_details))
        })
    }
}

fn render(res: ServiceResponse<BoxBody>, expose_details: bool) -> ServiceResponse<BoxBody> {
    let status = res.status();
    let mut envelope = match res.response().error() {
        Some(err) => envelope_for(err, status, expose_details),
        None => return res,
    };

    if let Some(request_id) = res.request().extensions().get::<RequestId>() {
        envelope = envelope.with_request_id(request_id.as_str());
    }

    let body = serde_json::to_string(&envelope).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize error envelope: {}", e);
        r#"{"success":false,"error":"Internal Server Error"}"#.to_string()
    });

    res.map_body(|head, _| {
        head.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        BoxBody::new(body)
    })
}

fn envelope_for(err: &Error, status: StatusCode, expose_details: bool) -> ErrorResponse {
    if let Some(app_err) = err.as_error::<AppError>() {
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", app_err);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", app_err);
        }
        return app_err.to_envelope(expose_details);
    }

    // Framework-level failure (payload, routing guards, CORS).
    tracing::warn!(status = status.as_u16(), "Request failed: {}", err);
    let summary = if status.is_server_error() {
        "Internal Server Error"
    } else {
        status.canonical_reason().unwrap_or("Request failed")
    };
    let envelope = ErrorResponse::new(summary);
    if expose_details {
        envelope.with_message(err.to_string())
    } else {
        envelope
    }
}
