//! Favorite operation parameters.
//!
//! Favorites carry no domain model of their own: listing a user's favorites
//! returns the favorited venues directly.

/// Parameters for adding or removing a favorite.
#[derive(Debug, Clone)]
pub struct FavoriteParams {
    /// Database id of the authenticated user.
    pub user_id: i32,
    /// Database id of the venue being (un)favorited.
    pub venue_id: i32,
}
