use axum::http::{header, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenService},
};

pub enum Permission {
    Admin,
}

/// Authentication gate over the bearer token of a request.
///
/// Verification is stateless: the guard decodes and validates the token and
/// trusts its claims without a database lookup. Every failure is terminal for
/// the request; there is no retry path.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Verifies the request's bearer token and checks the given permissions.
    ///
    /// A missing or malformed Authorization header, a bad signature, and an
    /// expired token all map to a 401; a valid token missing the admin claim
    /// on an admin-gated call maps to a 403.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the decoded claims must carry; empty for
    ///   plain authentication
    ///
    /// # Returns
    /// - `Ok(Claims)` - Verified claims of the authenticated user
    /// - `Err(AppError::AuthErr)` - Authentication or authorization failure
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let header_value = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin {
                        return Err(AuthError::AccessDenied(claims.sub).into());
                    }
                }
            }
        }

        Ok(claims)
    }
}
