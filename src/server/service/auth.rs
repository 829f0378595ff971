//! Registration and login.
//!
//! Password hashing and verification live here, on the write path, rather
//! than in an entity lifecycle hook: the hash is computed whenever a
//! plaintext password is supplied and never anywhere else.

use bcrypt::{hash, verify, DEFAULT_COST};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthSession, LoginParams, RegisterParams},
        user::CreateUserParams,
    },
    service::token::TokenService,
};

/// Service providing registration and login.
///
/// Holds references to the database connection and the token service.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Reference to the token service
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account and issues its first token.
    ///
    /// The username must be unused; registration never grants the admin role.
    ///
    /// # Arguments
    /// - `params` - Requested username and plaintext password
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token, user id, and admin flag for the new account
    /// - `Err(AppError::BadRequest)` - Username already exists
    /// - `Err(AppError)` - Database or hashing error
    pub async fn register(&self, params: RegisterParams) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::BadRequest("Username already exists".to_string()));
        }

        let password_hash = hash(&params.password, DEFAULT_COST)?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                password_hash,
                admin: false,
            })
            .await?;

        let token = self.tokens.issue(user.id, user.admin)?;

        Ok(AuthSession {
            token,
            user_id: user.id,
            is_admin: user.admin,
        })
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    ///
    /// # Arguments
    /// - `params` - Username and plaintext password to verify
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Token, user id, and admin flag
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(AppError)` - Database or hashing error
    pub async fn login(&self, params: LoginParams) -> Result<AuthSession, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(&params.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify(&params.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id, user.admin)?;

        Ok(AuthSession {
            token,
            user_id: user.id,
            is_admin: user.admin,
        })
    }
}
