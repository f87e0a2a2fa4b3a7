pub mod modules;
pub mod routes;
mod schema;
pub mod seed;
pub mod shared;
pub mod state;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;

use routes::build_router;
use shared::errors::{AppError, AppResult};
use shared::utils::logger::init_logger;
use shared::{AppConfig, Database, StorageBackend};
use state::AppState;

/// Build state from configuration and serve until Ctrl+C or SIGTERM.
pub async fn run() -> AppResult<()> {
    init_logger();

    let config = AppConfig::load()?;
    let state = build_state(&config).await?;

    if config.seed_demo_data {
        seed::seed_demo_data(&state).await?;
    }

    let app = build_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::Configuration(format!("Failed to bind {}: {}", address, e)))?;
    log_info!("Server running on {} (storage: {})", address, config.storage.name());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    log_info!("Server stopped");
    Ok(())
}

pub async fn build_state(config: &AppConfig) -> AppResult<AppState> {
    match &config.storage {
        StorageBackend::Postgres { database_url } => {
            let database = Database::connect_with_retry(
                database_url,
                config.db_pool_max_size,
                config.db_connect_retries,
            )
            .await?;
            Ok(AppState::postgres(Arc::new(database)))
        }
        StorageBackend::InMemory => Ok(AppState::in_memory()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => log_info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                log_error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log_info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log_error!("Failed to install SIGTERM handler: {}", e);
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
