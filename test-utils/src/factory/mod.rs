//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let venue = factory::venue::create_venue(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, venue, comment) = factory::helpers::create_comment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let comment = factory::comment::CommentFactory::new(&db, user.id, venue.id)
//!     .rating(5)
//!     .body("Great venue")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `venue` - Create venue entities
//! - `comment` - Create comment entities
//! - `favorite` - Create favorite entities
//! - `event` - Create event entities
//! - `event_date` - Create event date entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod comment;
pub mod event;
pub mod event_date;
pub mod favorite;
pub mod helpers;
pub mod user;
pub mod venue;

// Re-export commonly used factory functions for concise usage
pub use comment::create_comment;
pub use event::create_event;
pub use event_date::create_event_date;
pub use favorite::create_favorite;
pub use user::create_user;
pub use venue::create_venue;
