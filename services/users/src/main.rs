use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{ConnectOptions, Database};
use tracing::info;

use rolodex_core::shutdown::shutdown_signal;
use rolodex_core::tracing::init_tracing;
use rolodex_users::config::{USERS_PORT, UsersConfig};
use rolodex_users::infra::host::server_id;
use rolodex_users::router::build_router;
use rolodex_users::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = UsersConfig::from_env().context("invalid configuration")?;

    let mut options = ConnectOptions::new(config.database_url()?);
    options
        .acquire_timeout(config.query_timeout)
        .sqlx_logging(false);
    let db = Arc::new(
        Database::connect(options)
            .await
            .context("failed to connect to database")?,
    );

    let state = AppState {
        db: Arc::clone(&db),
        server_id: server_id().into(),
        query_timeout: config.query_timeout,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{USERS_PORT}");
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .context("failed to bind")?;

    info!("users service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    // The router and every handler clone of the state are gone once serve returns.
    let db = Arc::into_inner(db).context("database pool still shared at shutdown")?;
    db.close().await.context("failed to close database pool")?;
    info!("database pool closed");
    Ok(())
}
