#![allow(async_fn_in_trait)]

use crate::domain::types::{NewUser, User};
use crate::error::UsersServiceError;

/// Read access to user records.
pub trait UserRepository: Send + Sync {
    /// Look up a user by the raw path segment. The store decides whether the
    /// value is a usable identifier; a rejected value is an error, not `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UsersServiceError>;
}

/// Schema and demonstration data for the seed job.
pub trait SeedRepository: Send + Sync {
    /// Create the `users` table if it does not exist. Never alters an existing one.
    async fn ensure_schema(&self) -> Result<(), UsersServiceError>;
    /// Insert unconditionally and return the stored row.
    async fn insert(&self, user: &NewUser) -> Result<User, UsersServiceError>;
}
