//! Authentication endpoints: signup and login.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tally_shared::{
    auth::{jwt, password},
    models::{
        account::{Account, CreateAccount},
        membership::{CreateMembership, Membership, ADMIN_ROLE},
        user::{CreateUser, User},
    },
};

/// Signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Email address (must not already be registered)
    pub email: String,

    /// Plaintext password, hashed before storage
    pub password: String,

    /// Display name
    pub name: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,

    /// Plaintext password
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always `true` on success
    pub auth: bool,

    /// Signed bearer token, 24-hour expiry
    pub token: String,
}

/// Registers a new user with a personal account
///
/// Creates the User, then an Account owned by it, then the `"admin"`
/// Membership linking the two. The three creations run in sequence with no
/// compensating rollback: if a later step fails, the earlier records
/// persist and the failed step's error is returned.
///
/// # Endpoint
///
/// ```text
/// POST /signup
/// Content-Type: application/json
///
/// { "email": "ann@example.com", "password": "pw", "name": "Ann" }
/// ```
///
/// # Errors
///
/// - `400`: a user with this email already exists
/// - `500`: store failure
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SignupRequest>,
) -> ApiResult<&'static str> {
    if User::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &state.db,
        CreateUser {
            email: req.email,
            password_hash,
            name: req.name,
        },
    )
    .await?;

    let account = Account::create(&state.db, CreateAccount { admin_id: user.id }).await?;

    Membership::create(
        &state.db,
        CreateMembership {
            user_id: user.id,
            account_id: account.id,
            role: ADMIN_ROLE.to_string(),
        },
    )
    .await?;

    Ok("User and personal account created successfully")
}

/// Authenticates a user and issues a bearer token
///
/// The token embeds the user's id in the `id` claim, signed HS256 with the
/// server secret, expiring after 24 hours. There is no refresh mechanism.
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// { "email": "ann@example.com", "password": "pw" }
/// ```
///
/// # Errors
///
/// - `404`: no user with this email
/// - `401`: password does not match
/// - `500`: store failure
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    let token = jwt::create_token(&jwt::Claims::new(user.id), state.jwt_secret())?;

    Ok(Json(LoginResponse { auth: true, token }))
}
