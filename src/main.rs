//! Warden Server — token lifecycle and identity backend
//!
//! Binary entry point: loads configuration, assembles every subsystem,
//! and runs the HTTP server until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use warden_api::state::AppState;
use warden_auth::audit::ChannelAuditSink;
use warden_auth::jwt::{JwtDecoder, JwtEncoder};
use warden_auth::password::PasswordHasher;
use warden_auth::session::{ExpirySweeper, RefreshTokenStore, SessionManager};
use warden_auth::validator::TokenValidator;
use warden_core::config::AppConfig;
use warden_core::error::AppError;
use warden_core::traits::AuditSink;
use warden_database::StorageBackend;

#[tokio::main]
async fn main() {
    let env = std::env::var("WARDEN_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

/// Install the tracing subscriber in the configured format.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
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

/// Assemble every subsystem and serve until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Warden v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Storage backend (runs migrations on Postgres) ────
    tracing::info!("Connecting storage backend '{}'...", config.database.backend);
    let storage = StorageBackend::connect(&config.database).await?;
    tracing::info!("Storage backend ready");

    // ── Step 2: Auth system ──────────────────────────────────────
    tracing::info!("Wiring token and credential services...");
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let refresh_store = RefreshTokenStore::new(Arc::clone(&storage.refresh_tokens), &config.auth);
    let validator = Arc::new(TokenValidator::new(
        Arc::clone(&jwt_decoder),
        Arc::clone(&storage.users),
    ));

    // ── Step 3: Audit writer ─────────────────────────────────────
    let (channel_sink, audit_handle) =
        ChannelAuditSink::spawn(Arc::clone(&storage.audit_logs), config.audit.queue_capacity);
    let audit_sink: Arc<dyn AuditSink> = Arc::new(channel_sink.clone());

    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&storage.users),
        refresh_store.clone(),
        Arc::clone(&jwt_encoder),
        Arc::clone(&password_hasher),
        Arc::clone(&audit_sink),
    ));

    // ── Step 4: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // ── Step 5: Expiry sweeper ───────────────────────────────────
    let sweeper = ExpirySweeper::new(refresh_store, config.auth.sweep_interval_seconds);
    let sweeper_handle = tokio::spawn(sweeper.run(shutdown_rx.clone()));

    // ── Step 6: Build and start HTTP server ──────────────────────
    let shutdown_grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = AppState {
        config: Arc::new(config),
        storage: storage.clone(),
        session_manager,
        validator,
        audit_sink,
    };

    let app = warden_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Cannot bind {addr}: {e}")))?;

    tracing::info!("Warden server listening on {}", addr);

    // ── Step 7: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received; draining...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server terminated abnormally: {e}")))?;

    // ── Step 8: Wait for background tasks ────────────────────────
    tracing::info!("Waiting for background tasks...");

    let _ = tokio::time::timeout(shutdown_grace, sweeper_handle).await;

    // The writer drains once every sink handle is gone; the server (and
    // with it the state's sink) is already dropped at this point.
    drop(channel_sink);
    let _ = tokio::time::timeout(shutdown_grace, audit_handle).await;

    storage.shutdown().await;

    tracing::info!("Warden server shut down gracefully");
    Ok(())
}

/// Resolve when either Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Ctrl+C handler must install");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler must install")
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
