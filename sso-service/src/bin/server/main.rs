use std::net::SocketAddr;
use std::sync::Arc;

use sso_service::config::Config;
use sso_service::domain::auth::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::SqliteCredentialStore;
use sso_service::proto::auth_server::AuthServer;
use sso_service::telemetry;
use tonic::transport::Server;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    telemetry::init(config.env);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        env = ?config.env,
        "Service starting"
    );

    tracing::info!(
        storage_path = %config.storage.path,
        grpc_port = config.grpc.port,
        grpc_timeout_ms = config.grpc.timeout_ms,
        token_ttl_minutes = config.token.ttl_minutes,
        "Configuration loaded"
    );

    let store = Arc::new(SqliteCredentialStore::connect(&config.storage).await?);
    tracing::info!(
        max_connections = config.storage.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    store.migrate().await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let password_hasher = auth::PasswordHasher::with_cost((&config.hashing).into())?;
    let token_issuer = auth::TokenIssuer::new(config.token.ttl()?);

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&store),
        password_hasher,
        token_issuer,
    ));

    let grpc_address: SocketAddr = format!("0.0.0.0:{}", config.grpc.port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.grpc.port,
        protocol = "grpc",
        "gRpc server listening"
    );

    // Deadlines are the smaller of the configured timeout and the caller's grpc-timeout
    let result = Server::builder()
        .timeout(config.grpc.timeout())
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await;

    store.close().await;

    match result {
        Ok(()) => tracing::info!("Service stopped gracefully"),
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            return Err(e.into());
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for SIGINT");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!(signal = "SIGINT", "Shutdown requested"),
        _ = terminate => tracing::info!(signal = "SIGTERM", "Shutdown requested"),
    }
}
