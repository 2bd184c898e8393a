//! Graceful shutdown handling for the gateway.

use tokio::signal;
use tracing::info;

/// Create a future that completes when a shutdown signal is received.
///
/// Listens for SIGTERM (container orchestrators) and SIGINT (Ctrl+C for
/// local development). Requests already inside the store run to
/// completion; Axum stops accepting new connections and drains the rest.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
