//! Application factory shared by the server and the handler tests.

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::{cors::cors, error::ErrorEnvelope};
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Largest accepted JSON body.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Per-deployment knobs for the middleware stack.
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    pub expose_error_details: bool,
    /// Single allowed CORS origin; `None` allows any origin.
    pub frontend_origin: Option<String>,
}

impl From<&AppConfig> for HttpOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            expose_error_details: config.environment.exposes_error_details(),
            frontend_origin: config.frontend_origin.clone(),
        }
    }
}

/// Builds the app with routes and the full middleware chain.
///
/// Outermost first: request tracing, request id, error envelope, CORS.
pub fn build_app(
    state: AppState,
    options: &HttpOptions,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody + use<>>,
        Error = Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().limit(MAX_BODY_BYTES))
        .wrap(cors(options.frontend_origin.as_deref()))
        .wrap(ErrorEnvelope::new(options.expose_error_details))
        .wrap(RequestIdMiddleware)
        .wrap(TracingLogger::default())
        .configure(handlers::configure_routes)
}
