//! JWT bearer tokens.
//!
//! Tokens are signed with HS256 (HMAC-SHA256) using a server-held secret
//! and expire 24 hours after issue. The claim set is part of the external
//! interface: clients and other services read the user id from the `id`
//! claim.
//!
//! There is no refresh mechanism; an expired token means logging in again.
//!
//! # Example
//!
//! ```
//! use tally_shared::auth::jwt::{create_token, validate_token, Claims};
//! use uuid::Uuid;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let user_id = Uuid::new_v4();
//! let token = create_token(&Claims::new(user_id), "server-secret")?;
//!
//! let claims = validate_token(&token, "server-secret")?;
//! assert_eq!(claims.id, user_id);
//! # Ok(())
//! # }
//! ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed token lifetime: 24 hours
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Failed to validate token
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// JWT claims structure
///
/// `id` is the authenticated user's id; the claim name is fixed by the
/// wire contract. `iat`/`exp` are standard Unix-timestamp claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user ID
    pub id: Uuid,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user with the fixed 24-hour expiry
    pub fn new(user_id: Uuid) -> Self {
        Self::with_expiration(user_id, Duration::hours(TOKEN_TTL_HOURS))
    }

    /// Creates claims with a custom expiry (used by tests)
    pub fn with_expiration(user_id: Uuid, expires_in: Duration) -> Self {
        let now = Utc::now();

        Self {
            id: user_id,
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        }
    }

    /// Checks whether the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a token string
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token's signature and expiry and returns its claims
///
/// # Errors
///
/// Returns `JwtError::Expired` for an expired token and
/// `JwtError::ValidationError` for a bad signature or malformed token.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id);

        assert_eq!(claims.id, user_id);
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn test_create_and_validate_token() {
        let user_id = Uuid::new_v4();
        let secret = "test-secret-key-at-least-32-bytes-long";

        let token = create_token(&Claims::new(user_id), secret).expect("should create token");
        let validated = validate_token(&token, secret).expect("should validate token");

        assert_eq!(validated.id, user_id);
    }

    #[test]
    fn test_validate_with_wrong_secret() {
        let token = create_token(&Claims::new(Uuid::new_v4()), "secret1").unwrap();

        let result = validate_token(&token, "wrong-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_expired_token() {
        let secret = "test-secret";
        let claims = Claims::with_expiration(Uuid::new_v4(), Duration::seconds(-3600));

        assert!(claims.is_expired());

        let token = create_token(&claims, secret).unwrap();
        let result = validate_token(&token, secret);

        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_token_claim_name_is_id() {
        // The `id` claim name is a wire contract; decoding the payload
        // directly guards against accidental renames.
        let token = create_token(&Claims::new(Uuid::new_v4()), "secret").unwrap();
        let payload = token.split('.').nth(1).unwrap();

        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(value.get("id").is_some());
        assert!(value.get("sub").is_none());
    }
}
