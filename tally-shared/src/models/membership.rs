//! Membership model and database operations.
//!
//! A membership is the authorization edge between a user and an account,
//! tagged with a free-form role string. Signup writes exactly one membership
//! per new account, role `"admin"`, pointing back at the account's creator.
//! The shape permits additional members on an account even though no current
//! route creates them.
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE memberships (
//!     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
//!     user_id UUID NOT NULL REFERENCES users(id),
//!     account_id UUID NOT NULL REFERENCES accounts(id),
//!     role TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Role assigned to the account creator at signup
pub const ADMIN_ROLE: &str = "admin";

/// Membership model linking a user to an account with a role
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membership {
    /// Unique membership ID
    pub id: Uuid,

    /// Member user
    pub user_id: Uuid,

    /// Account the user belongs to
    pub account_id: Uuid,

    /// Free-form role string, e.g. `"admin"`
    pub role: String,

    /// When the membership was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMembership {
    /// Member user
    pub user_id: Uuid,

    /// Account to join
    pub account_id: Uuid,

    /// Role within the account
    pub role: String,
}

impl Membership {
    /// Creates a new membership (adds a user to an account)
    pub async fn create(pool: &PgPool, data: CreateMembership) -> Result<Self, sqlx::Error> {
        let membership = sqlx::query_as::<_, Membership>(
            r#"
            INSERT INTO memberships (user_id, account_id, role)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, account_id, role, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.account_id)
        .bind(data.role)
        .fetch_one(pool)
        .await?;

        Ok(membership)
    }

    /// Lists all memberships held by one user
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let memberships = sqlx::query_as::<_, Membership>(
            r#"
            SELECT id, user_id, account_id, role, created_at
            FROM memberships
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(memberships)
    }

    /// Lists all memberships on one account
    pub async fn find_by_account(pool: &PgPool, account_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let memberships = sqlx::query_as::<_, Membership>(
            r#"
            SELECT id, user_id, account_id, role, created_at
            FROM memberships
            WHERE account_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(account_id)
        .fetch_all(pool)
        .await?;

        Ok(memberships)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_membership_struct() {
        let create = CreateMembership {
            user_id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            role: ADMIN_ROLE.to_string(),
        };

        assert_eq!(create.role, "admin");
    }
}
