use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use virtual_gallery::{
    AppState, build_router,
    config::Config,
    db::Database,
    error::Result,
    services::auth::JwtService,
    utils::server::{init_tracing, shutdown_signal},
};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    let db = Database::init_db(&config.database).await?;
    tracing::info!("Database initialized");

    db.run_migrations().await?;
    tracing::info!("Migrations completed");

    let jwt_service = JwtService::new(&config.jwt);
    tracing::info!("JWT service initialized");

    let state = AppState {
        config: Arc::new(config.clone()),
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
    };

    let app = build_router(state);

    let server_addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
