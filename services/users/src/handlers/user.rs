use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::UsersServiceError;
use crate::state::AppState;
use crate::usecase::user::GetUserUseCase;

// ── GET /users/{id} ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub address_state: Option<String>,
    pub address_zip: Option<String>,
    pub phone_number: Option<Vec<String>>,
    pub server_id: String,
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, UsersServiceError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
        query_timeout: state.query_timeout,
    };
    let user = usecase.execute(&id).await?;
    Ok(Json(UserResponse {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        address_street: user.address_street,
        address_city: user.address_city,
        address_state: user.address_state,
        address_zip: user.address_zip,
        phone_number: user.phone_number,
        server_id: state.server_id.to_string(),
    }))
}
