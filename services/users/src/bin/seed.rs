//! One-shot job: create the `users` table if missing and insert the
//! demonstration row. Failures are logged; the pool is closed either way.

use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{Database, DatabaseConnection};
use tracing::{error, info};

use rolodex_core::tracing::init_tracing;
use rolodex_users::config::UsersConfig;
use rolodex_users::infra::db::DbSeedRepository;
use rolodex_users::usecase::seed::SeedUseCase;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            error!(error = ?e, "error initializing database");
            return;
        }
    };
    info!("connected to database");

    let db = Arc::new(db);
    let usecase = SeedUseCase {
        repo: DbSeedRepository {
            db: Arc::clone(&db),
        },
    };
    match usecase.execute().await {
        Ok(user) => info!(?user, "data seeded"),
        Err(e) => error!(error = ?e, "error initializing database"),
    }
    drop(usecase);

    let Some(db) = Arc::into_inner(db) else {
        error!("database pool still shared, leaving it to process exit");
        return;
    };
    if let Err(e) = db.close().await {
        error!(error = %e, "failed to close database pool");
    }
}

async fn connect() -> anyhow::Result<DatabaseConnection> {
    let config = UsersConfig::from_env().context("invalid configuration")?;
    Database::connect(config.database_url()?)
        .await
        .context("failed to connect to database")
}
