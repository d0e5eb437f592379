//! # Tally Shared Library
//!
//! Shared types and business logic for the Tally expense-tracking backend:
//! database models, authentication primitives, and connection plumbing used
//! by the API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and CRUD operations
//! - `auth`: Password hashing and JWT tokens
//! - `db`: Connection pool and migrations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Tally shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
