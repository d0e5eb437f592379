//! User lookup endpoint.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tally_shared::models::user::User;
use uuid::Uuid;

/// User lookup response, display name only
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// Display name
    pub name: String,
}

/// `GET /users/:id`: fetches a user's display name
///
/// The path id is format-checked before any store access: a string that is
/// not a valid UUID is rejected with 400 without querying the database.
/// No ownership check is made; any caller may look up any id.
///
/// # Errors
///
/// - `400`: id is not a well-formed UUID
/// - `404`: no user with this id
/// - `500`: store failure
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("Invalid user ID".to_string()))?;

    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse { name: user.name }))
}
