//! FolderHub server: per-user folder management API.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use folderhub_api::AppState;
use folderhub_auth::jwt::JwtDecoder;
use folderhub_core::config::{AppConfig, DatabaseProvider};
use folderhub_core::error::AppError;
use folderhub_database::{DatabasePool, FolderStore};
use folderhub_database::repositories::{FolderRepository, MemoryFolderStore};
use folderhub_service::folder::FolderService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FOLDERHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// The folder store chosen by configuration, plus the pool behind it if any.
struct OpenedStore {
    store: Arc<dyn FolderStore>,
    db_pool: Option<DatabasePool>,
}

/// Open the configured folder store, running migrations when asked to.
async fn open_store(config: &AppConfig) -> Result<OpenedStore, AppError> {
    match config.database.provider {
        DatabaseProvider::Postgres => {
            let db_pool = DatabasePool::connect(&config.database).await?;

            if config.database.run_migrations {
                folderhub_database::migration::run_migrations(db_pool.pool()).await?;
            }

            Ok(OpenedStore {
                store: Arc::new(FolderRepository::new(db_pool.pool().clone())),
                db_pool: Some(db_pool),
            })
        }
        DatabaseProvider::Memory => {
            tracing::warn!("Using in-memory folder store; data is lost on restart");
            Ok(OpenedStore {
                store: Arc::new(MemoryFolderStore::new()),
                db_pool: None,
            })
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FolderHub v{}", env!("CARGO_PKG_VERSION"));

    let OpenedStore { store, db_pool } = open_store(&config).await?;

    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let folder_service = Arc::new(FolderService::new(store));
    let config = Arc::new(config);

    let addr = config.server.bind_address();
    let app_state = AppState::new(Arc::clone(&config), jwt_decoder, folder_service);
    let app = folderhub_api::build_app(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("FolderHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(db_pool) = db_pool {
        db_pool.close().await;
    }

    tracing::info!("FolderHub server shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
