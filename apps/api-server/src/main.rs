//! # Posts API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::io;
use std::sync::Arc;

use actix_web::HttpServer;

use posts_infra::PostgrestPostRepository;

mod app;
mod config;
mod handlers;
mod middleware;
mod observability;
mod shutdown;
mod state;
mod telemetry;

use app::HttpOptions;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(
        environment = ?config.environment,
        cors_origin = config.frontend_origin.as_deref().unwrap_or("*"),
        "Starting Posts API Server on {}:{}",
        config.host,
        config.port
    );

    let posts = PostgrestPostRepository::new(&config.database).map_err(|e| {
        tracing::error!("Failed to build database client: {}", e);
        io::Error::other(e)
    })?;
    let state = AppState::new(Arc::new(posts));

    let options = HttpOptions::from(&config);

    let server = HttpServer::new(move || app::build_app(state.clone(), &options))
    .disable_signals()
    .bind((config.host.as_str(), config.port))?
    .run();

    actix_web::rt::spawn(shutdown::exit_on_signal());

    server.await
}
