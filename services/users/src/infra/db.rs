use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    Statement,
};

use rolodex_users_migration::create_users_table;
use rolodex_users_schema::users;

use crate::domain::repository::{SeedRepository, UserRepository};
use crate::domain::types::{NewUser, User};
use crate::error::UsersServiceError;

/// The path segment is bound as text and cast by PostgreSQL, so a value that
/// is not an integer fails in the database rather than in the service.
pub const FIND_USER_BY_ID: &str = "SELECT * FROM users WHERE id = CAST($1 AS INTEGER)";

// ── User repository ──────────────────────────────────────────────────────────

pub struct DbUserRepository {
    pub db: Arc<DatabaseConnection>,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, UsersServiceError> {
        let model = users::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                FIND_USER_BY_ID,
                [id.into()],
            ))
            .one(self.db.as_ref())
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }
}

// ── Seed repository ──────────────────────────────────────────────────────────

pub struct DbSeedRepository {
    pub db: Arc<DatabaseConnection>,
}

impl SeedRepository for DbSeedRepository {
    async fn ensure_schema(&self) -> Result<(), UsersServiceError> {
        let backend = self.db.get_database_backend();
        self.db
            .execute(backend.build(&create_users_table()))
            .await
            .context("create users table")?;
        Ok(())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UsersServiceError> {
        let model = users::ActiveModel {
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            address_street: Set(user.address_street.clone()),
            address_city: Set(user.address_city.clone()),
            address_state: Set(user.address_state.clone()),
            address_zip: Set(user.address_zip.clone()),
            phone_number: Set(user.phone_number.clone()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .context("insert user")?;
        Ok(user_from_model(model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        address_street: model.address_street,
        address_city: model.address_city,
        address_state: model.address_state,
        address_zip: model.address_zip,
        phone_number: model.phone_number,
    }
}
