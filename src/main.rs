//! Credo Server — account management service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use credo_auth::password::PasswordHasher;
use credo_auth::token::TokenIssuer;
use credo_core::config::AppConfig;
use credo_core::error::AppError;
use credo_core::traits::UserStore;
use credo_database::UserRepository;
use credo_entity::user::User;
use credo_service::account::AccountService;

#[tokio::main]
async fn main() {
    let env = std::env::var("CREDO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Credo v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let db_pool = credo_database::connection::create_pool(&config.database).await?;
    credo_database::migration::run_migrations(&db_pool).await?;

    // Credential store
    let store: Arc<dyn UserStore<User>> = Arc::new(UserRepository::new(db_pool.clone()));

    // Auth primitives — the signing secret is injected here, once
    let token_issuer = Arc::new(TokenIssuer::new(&config.auth));
    let password_hasher = Arc::new(PasswordHasher::new());

    // Services
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&store),
        Arc::clone(&token_issuer),
        Arc::clone(&password_hasher),
    ));

    let app_state = credo_api::state::AppState {
        config: Arc::new(config.clone()),
        store,
        token_issuer,
        account_service,
    };

    let app = credo_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Credo server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Credo server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
