pub use super::comment::Entity as Comment;
pub use super::event::Entity as Event;
pub use super::event_date::Entity as EventDate;
pub use super::favorite::Entity as Favorite;
pub use super::user::Entity as User;
pub use super::venue::Entity as Venue;
