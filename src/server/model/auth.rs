//! Authentication domain models and parameters.

use crate::model::auth::AuthResponseDto;

/// Issued session token with the identity it encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    /// Signed bearer token.
    pub token: String,
    /// Database id of the authenticated user.
    pub user_id: i32,
    /// Whether the user holds the admin role.
    pub is_admin: bool,
}

impl AuthSession {
    /// Converts the session to the token response DTO.
    pub fn into_dto(self) -> AuthResponseDto {
        AuthResponseDto {
            token: self.token,
            user_id: self.user_id,
            is_admin: self.is_admin,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    /// Requested unique login name.
    pub username: String,
    /// Plaintext password; hashed by the auth service before storage.
    pub password: String,
}

/// Parameters for logging in.
#[derive(Debug, Clone)]
pub struct LoginParams {
    /// Login name.
    pub username: String,
    /// Plaintext password to verify against the stored hash.
    pub password: String,
}
