//! Account model and database operations.
//!
//! An account is the tenant unit expenses are recorded against. One is
//! created per signup, owned by the new user via `admin_id`.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE accounts (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     admin_id UUID NOT NULL REFERENCES users(id),
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Account model representing one tenant group
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID
    pub id: Uuid,

    /// User who owns this account
    pub admin_id: Uuid,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Owning user
    pub admin_id: Uuid,
}

impl Account {
    /// Creates a new account owned by `admin_id`
    pub async fn create(pool: &PgPool, data: CreateAccount) -> Result<Self, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (admin_id)
            VALUES ($1)
            RETURNING id, admin_id, created_at
            "#,
        )
        .bind(data.admin_id)
        .fetch_one(pool)
        .await?;

        Ok(account)
    }

    /// Finds an account by ID, `None` if absent
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, admin_id, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Lists all accounts owned by one user
    pub async fn find_by_admin(pool: &PgPool, admin_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, admin_id, created_at
            FROM accounts
            WHERE admin_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(admin_id)
        .fetch_all(pool)
        .await?;

        Ok(accounts)
    }
}
