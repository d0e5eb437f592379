//! Account listing endpoints.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use tally_shared::models::{account::Account, expense::Expense};
use uuid::Uuid;

/// `GET /accounts/current/:user_id`: accounts administered by a user
///
/// Returns the (possibly empty) array of accounts whose `admin_id` is the
/// given user. Membership-only accounts are not included. No check is made
/// that the caller is the user in question.
///
/// # Errors
///
/// - `400`: id is not a well-formed UUID
/// - `500`: store failure
pub async fn current_accounts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<Account>>> {
    let admin_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::BadRequest("Invalid user ID".to_string()))?;

    let accounts = Account::find_by_admin(&state.db, admin_id).await?;

    Ok(Json(accounts))
}

/// `GET /accounts/:account_id/expenses`: all expenses on an account
///
/// Returns the full, unpaginated array. No membership check is made on the
/// caller.
///
/// # Errors
///
/// - `400`: id is not a well-formed UUID
/// - `500`: store failure
pub async fn account_expenses(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> ApiResult<Json<Vec<Expense>>> {
    let account_id = Uuid::parse_str(&account_id)
        .map_err(|_| ApiError::BadRequest("Invalid account ID".to_string()))?;

    let expenses = Expense::find_by_account(&state.db, account_id).await?;

    Ok(Json(expenses))
}
