//! Database models for Tally
//!
//! One module per entity, each offering create/find operations over a
//! `&PgPool`. The router composes calls; no model performs cross-entity
//! joins.
//!
//! - `user`: credential records (email, password hash, display name)
//! - `account`: tenant groups, each owned by one admin user
//! - `membership`: role-tagged edges between users and accounts
//! - `expense`: financial records scoped to an account

pub mod account;
pub mod expense;
pub mod membership;
pub mod user;
