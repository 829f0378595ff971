use super::*;

/// Tests that a valid token passes plain authentication.
///
/// Expected: Ok(Claims) carrying the encoded identity
#[test]
fn grants_access_with_valid_token() {
    let tokens = TokenService::new("test-secret");
    let token = tokens.issue(7, false).unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(result.is_ok());
    let claims = result.unwrap();
    assert_eq!(claims.sub, 7);
    assert!(!claims.is_admin);
}

/// Tests that an admin token passes the admin permission check.
///
/// Expected: Ok(Claims) with the admin flag set
#[test]
fn grants_admin_access_to_admin_token() {
    let tokens = TokenService::new("test-secret");
    let token = tokens.issue(7, true).unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::Admin]);

    assert!(result.is_ok());
    assert!(result.unwrap().is_admin);
}

/// Tests that a valid non-admin token is denied admin access.
///
/// This is the 403 path, distinct from the 401 authentication failures.
///
/// Expected: Err(AuthError::AccessDenied) carrying the user id
#[test]
fn denies_admin_access_to_non_admin_token() {
    let tokens = TokenService::new("test-secret");
    let token = tokens.issue(7, false).unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(7)))
    ));
}

/// Tests that a request without an Authorization header is rejected.
///
/// Expected: Err(AuthError::MissingToken) for both gates
#[test]
fn rejects_missing_header() {
    let tokens = TokenService::new("test-secret");
    let headers = HeaderMap::new();

    let guard = AuthGuard::new(&tokens, &headers);

    assert!(matches!(
        guard.require(&[]),
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
    assert!(matches!(
        guard.require(&[Permission::Admin]),
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a non-bearer Authorization scheme is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let tokens = TokenService::new("test-secret");
    let mut headers = HeaderMap::new();
    headers.insert(
        axum::http::header::AUTHORIZATION,
        axum::http::HeaderValue::from_static("Basic dXNlcjpwYXNz"),
    );

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests that a token signed with a different secret is rejected by both gates.
///
/// Expected: Err(AuthError::InvalidToken) regardless of the admin claim
#[test]
fn rejects_foreign_secret_on_both_gates() {
    let ours = TokenService::new("test-secret");
    let theirs = TokenService::new("other-secret");
    let token = theirs.issue(7, true).unwrap();
    let headers = bearer_headers(&token);

    let guard = AuthGuard::new(&ours, &headers);

    assert!(matches!(
        guard.require(&[]),
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
    assert!(matches!(
        guard.require(&[Permission::Admin]),
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));
}
