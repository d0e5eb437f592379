//! Expense model and database operations.
//!
//! Expenses are financial records scoped to one account and authored by one
//! user. Both references are validated for identifier *format* at the API
//! boundary, not for existence: the columns carry no foreign keys, and a
//! well-formed UUID pointing at no row is accepted.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE expenses (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     name TEXT NOT NULL,
//!     amount DOUBLE PRECISION NOT NULL,
//!     date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
//!     created_by UUID NOT NULL,
//!     expense_type TEXT NOT NULL,
//!     image_path TEXT,
//!     account_id UUID NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Expense model representing one financial record
///
/// The category field is named `type` on the wire; `expense_type` in Rust
/// because `type` is reserved.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Expense {
    /// Unique expense ID
    pub id: Uuid,

    /// What the expense was for
    pub name: String,

    /// Monetary amount
    pub amount: f64,

    /// When the expense occurred; defaults to insertion time when the
    /// client omits it
    pub date: DateTime<Utc>,

    /// User who recorded the expense (format-checked reference)
    pub created_by: Uuid,

    /// Free-form category string
    #[serde(rename = "type")]
    pub expense_type: String,

    /// Optional path to a receipt image
    pub image_path: Option<String>,

    /// Account the expense is recorded against (format-checked reference)
    pub account_id: Uuid,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExpense {
    /// What the expense was for
    pub name: String,

    /// Monetary amount
    pub amount: f64,

    /// When the expense occurred; `None` defers to the store default
    pub date: Option<DateTime<Utc>>,

    /// User who recorded the expense
    pub created_by: Uuid,

    /// Free-form category string
    pub expense_type: String,

    /// Optional path to a receipt image
    pub image_path: Option<String>,

    /// Account the expense is recorded against
    pub account_id: Uuid,
}

impl Expense {
    /// Creates a new expense
    ///
    /// A `None` date falls back to `NOW()` at insertion.
    pub async fn create(pool: &PgPool, data: CreateExpense) -> Result<Self, sqlx::Error> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (name, amount, date, created_by, expense_type, image_path, account_id)
            VALUES ($1, $2, COALESCE($3, NOW()), $4, $5, $6, $7)
            RETURNING id, name, amount, date, created_by, expense_type, image_path,
                      account_id, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.amount)
        .bind(data.date)
        .bind(data.created_by)
        .bind(data.expense_type)
        .bind(data.image_path)
        .bind(data.account_id)
        .fetch_one(pool)
        .await?;

        Ok(expense)
    }

    /// Lists all expenses recorded against one account
    pub async fn find_by_account(pool: &PgPool, account_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, name, amount, date, created_by, expense_type, image_path,
                   account_id, created_at
            FROM expenses
            WHERE account_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(account_id)
        .fetch_all(pool)
        .await?;

        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_type_serializes_as_type() {
        let expense = Expense {
            id: Uuid::new_v4(),
            name: "Team lunch".to_string(),
            amount: 42.5,
            date: Utc::now(),
            created_by: Uuid::new_v4(),
            expense_type: "food".to_string(),
            image_path: None,
            account_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["type"], "food");
        assert!(json.get("expense_type").is_none());
        assert_eq!(json["amount"], 42.5);
    }

    #[test]
    fn test_create_expense_optional_fields() {
        let create = CreateExpense {
            name: "Taxi".to_string(),
            amount: 18.0,
            date: None,
            created_by: Uuid::new_v4(),
            expense_type: "travel".to_string(),
            image_path: None,
            account_id: Uuid::new_v4(),
        };

        assert!(create.date.is_none());
        assert!(create.image_path.is_none());
    }
}
