//! User administration.
//!
//! Listing and lookup back the admin user management routes. Deleting a user
//! removes their comments and favorites with them; every venue the user had
//! commented on gets its rating aggregates recomputed in the same
//! transaction so the invariant survives the cascade.

use std::collections::BTreeSet;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{comment::CommentRepository, user::UserRepository},
    error::AppError,
    model::user::User,
    service::comment::recompute_venue_stats,
};

/// Service providing business logic for user administration.
///
/// This struct holds a reference to the database connection and provides
/// methods for listing, fetching, and deleting users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered alphabetically by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users)
    }

    /// Gets one user by database id.
    ///
    /// # Arguments
    /// - `id` - Database id of the user
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError)` - Database error
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user)
    }

    /// Deletes a user and repairs the rating aggregates their comments backed.
    ///
    /// The user's comments and favorites cascade with the row; every venue
    /// they had commented on is recomputed before the transaction commits.
    ///
    /// # Arguments
    /// - `id` - Database id of the user to delete
    ///
    /// # Returns
    /// - `Ok(())` - User deleted and aggregates repaired
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let touched_venues: BTreeSet<i32> = CommentRepository::new(&txn)
            .get_by_user(id)
            .await?
            .into_iter()
            .map(|c| c.venue_id)
            .collect();

        let deleted = UserRepository::new(&txn).delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        for venue_id in touched_venues {
            recompute_venue_stats(&txn, venue_id).await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
