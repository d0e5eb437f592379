//! API route handlers, one module per resource.
//!
//! Every handler follows the same order of operations: validate identifier
//! format (UUID parse, no store access), run store calls sequentially, shape
//! the response. Failures short-circuit to an [`crate::error::ApiError`].

pub mod accounts;
pub mod auth;
pub mod expenses;
pub mod root;
pub mod users;
