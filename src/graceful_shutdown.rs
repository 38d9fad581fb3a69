use actix_web::dev::ServerHandle;
use tokio::signal;
use tracing::{error, warn};

/// Resolves once Ctrl+C or SIGTERM is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("🛑 Ctrl+C received, initiating shutdown...")
        },
        _ = terminate => {
            warn!("🛑 SIGTERM received, initiating shutdown...");
        }
    }
}

/// Waits for a shutdown signal, then lets in-flight requests finish before stopping.
pub async fn stop_on_signal(handle: ServerHandle) {
    shutdown_signal().await;
    handle.stop(true).await;
}
