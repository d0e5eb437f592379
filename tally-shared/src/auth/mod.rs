//! Authentication primitives for Tally
//!
//! - [`password`]: argon2id password hashing and verification
//! - [`jwt`]: HS256 bearer tokens with a fixed 24-hour expiry
//!
//! Verification is constant-time throughout; plaintext passwords never
//! leave the signup/login handlers.

pub mod jwt;
pub mod password;
