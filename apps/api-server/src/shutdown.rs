//! Termination signals.
//!
//! SIGTERM and SIGINT end the process at once: in-flight requests are not
//! drained. actix's own graceful handling is disabled in `main`.

/// Wait for a termination signal, log it and exit.
#[cfg(unix)]
pub async fn exit_on_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let (mut sigterm, mut sigint) = match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(term), Ok(int)) => (term, int),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Failed to register signal handlers: {}", e);
            return;
        }
    };

    let name = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    tracing::info!(signal = name, "Received termination signal, shutting down");
    std::process::exit(0);
}

#[cfg(not(unix))]
pub async fn exit_on_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!(signal = "ctrl-c", "Received termination signal, shutting down");
            std::process::exit(0);
        }
        Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
    }
}
