use std::time::Duration;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::UsersServiceError;

// ── GetUser ──────────────────────────────────────────────────────────────────

/// Look up one user. A lookup that outlives `query_timeout` is abandoned and
/// reported as an internal error.
pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
    pub query_timeout: Duration,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<User, UsersServiceError> {
        tokio::time::timeout(self.query_timeout, self.repo.find_by_id(id))
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "find user by id timed out after {}ms",
                    self.query_timeout.as_millis()
                )
            })??
            .ok_or(UsersServiceError::UserNotFound)
    }
}
