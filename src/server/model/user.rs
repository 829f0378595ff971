//! User domain models and parameters.
//!
//! Provides domain models for application users with credential storage and
//! permission tracking. Includes parameter types for user creation during
//! registration.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Application user with stored credentials and role flag.
///
/// The password hash never leaves the domain layer; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database id of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Bcrypt hash of the user's password.
    pub password_hash: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The stored password hash is intentionally not part of the DTO.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            is_admin: self.admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user record.
///
/// The password arrives already hashed; hashing happens in the auth service
/// so the trigger is visible in the write path.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    /// Unique login name.
    pub username: String,
    /// Bcrypt hash of the password.
    pub password_hash: String,
    /// Whether the user is created with admin privileges.
    pub admin: bool,
}
