pub mod bootstrap;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod rate_limit;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::info;

use crate::application::ResultExt;
use dailydiet_domain::shared::DomainError;
use dailydiet_infrastructure::config::Settings;

pub use bootstrap::build_app_state;
pub use routes::build_router;
pub use state::{AppState, SharedState};

/// Build the application and serve it until Ctrl+C or SIGTERM.
pub async fn run(settings: Settings) -> Result<(), DomainError> {
    let state = Arc::new(build_app_state(&settings).await?);
    let app = build_router(state);

    let address = settings.bind_address();
    info!("Binding to {}", address);
    let listener = TcpListener::bind(&address).await.to_infra_err()?;
    info!("Daily Diet API running on {} ({})", address, settings.env);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .to_infra_err()?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
