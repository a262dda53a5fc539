use crate::domain::repository::SeedRepository;
use crate::domain::types::{User, demo_user};
use crate::error::UsersServiceError;

// ── Seed ─────────────────────────────────────────────────────────────────────

/// Ensure the `users` table exists, then insert the demonstration row.
///
/// The insert is unconditional: every run appends another copy with a fresh
/// id. A failed insert leaves the table in place.
pub struct SeedUseCase<R: SeedRepository> {
    pub repo: R,
}

impl<R: SeedRepository> SeedUseCase<R> {
    pub async fn execute(&self) -> Result<User, UsersServiceError> {
        self.repo.ensure_schema().await?;
        tracing::info!(table = "users", "table ensured");
        self.repo.insert(&demo_user()).await
    }
}
