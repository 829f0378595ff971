//! Bearer token issuing and verification.
//!
//! Tokens are HS256-signed with the shared secret from configuration and
//! expire 24 hours after issue. The payload carries the user's database id
//! and admin flag; the auth guard trusts the verified claims without a
//! database round trip.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

/// Token lifetime in hours.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Database id of the authenticated user.
    pub sub: i32,
    /// Whether the user holds the admin role.
    pub is_admin: bool,
    /// Issued-at time as a Unix timestamp.
    pub iat: i64,
    /// Expiry time as a Unix timestamp, 24h after issue.
    pub exp: i64,
}

/// Service for issuing and verifying bearer tokens.
///
/// Holds the encoding and decoding keys derived from the configured shared
/// secret. Cheap to clone; lives in the application state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Creates a token service from the shared secret.
    ///
    /// # Arguments
    /// - `secret` - HS256 shared secret from configuration
    ///
    /// # Returns
    /// - `TokenService` - Service ready to issue and verify tokens
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Database id of the user
    /// - `is_admin` - Whether the user holds the admin role
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token valid for 24 hours
    /// - `Err(AppError::InternalError)` - Token could not be encoded
    pub fn issue(&self, user_id: i32, is_admin: bool) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            is_admin,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::InternalError(format!("Failed to encode token: {}", e)))
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Bearer token string without the scheme prefix
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed token, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
