//! Expense recording endpoint.

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tally_shared::models::expense::{CreateExpense, Expense};
use uuid::Uuid;

/// Add-expense request
///
/// `created_by` and `account_id` arrive as raw strings and are parsed here;
/// the category field is named `type` on the wire.
#[derive(Debug, Deserialize)]
pub struct AddExpenseRequest {
    /// What the expense was for
    pub name: String,

    /// Monetary amount
    pub amount: f64,

    /// When the expense occurred; omitted means "now"
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    /// Id of the recording user
    pub created_by: String,

    /// Free-form category string
    #[serde(rename = "type")]
    pub expense_type: String,

    /// Optional path to a receipt image
    #[serde(default)]
    pub image_path: Option<String>,

    /// Id of the account the expense belongs to
    pub account_id: String,
}

/// `POST /add-expense`: records an expense against an account
///
/// Both references are validated for UUID format before the store is
/// touched; a malformed id persists nothing. Format is all that is checked:
/// a well-formed id pointing at no existing user or account is accepted.
///
/// # Errors
///
/// - `400`: `created_by` or `account_id` is not a well-formed UUID
/// - `500`: store failure
pub async fn add_expense(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddExpenseRequest>,
) -> ApiResult<&'static str> {
    let (created_by, account_id) = match (
        Uuid::parse_str(&req.created_by),
        Uuid::parse_str(&req.account_id),
    ) {
        (Ok(created_by), Ok(account_id)) => (created_by, account_id),
        _ => {
            return Err(ApiError::BadRequest(
                "Invalid account or user ID".to_string(),
            ))
        }
    };

    Expense::create(
        &state.db,
        CreateExpense {
            name: req.name,
            amount: req.amount,
            date: req.date,
            created_by,
            expense_type: req.expense_type,
            image_path: req.image_path,
            account_id,
        },
    )
    .await?;

    Ok("Expense added successfully")
}
