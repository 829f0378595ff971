use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable bearer token in the Authorization header.
    ///
    /// The header is absent, is not valid UTF-8, or does not use the
    /// `Bearer <token>` scheme. Results in a 401 Unauthorized response.
    #[error("Missing or malformed Authorization header")]
    MissingToken,

    /// Token failed signature or expiry validation.
    ///
    /// The token was signed with a different secret, is structurally invalid,
    /// or its 24h lifetime has elapsed. Results in a 401 Unauthorized response.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Login failed against the stored credentials.
    ///
    /// The username is unknown or the password does not match the stored hash.
    /// The two cases are deliberately indistinguishable to the client.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Valid token without the admin claim on an admin-only route.
    ///
    /// Results in a 403 Forbidden response, distinct from the 401 returned
    /// for authentication failures.
    ///
    /// # Fields
    /// - Id of the user whose token lacked the admin claim
    #[error("User {0} lacks admin permissions")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to the two-status taxonomy of the API:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden with "Admin access required"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    message: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    message: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    message: "Admin access required".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
