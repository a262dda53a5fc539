use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::infra::db::DbUserRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    /// Host name merged into every user response.
    pub server_id: Arc<str>,
    pub query_timeout: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: Arc::clone(&self.db),
        }
    }
}
