//! Business logic layer orchestrating controllers and repositories.
//!
//! Services hold a reference to the database connection, open transactions
//! where one logical operation spans several rows (comment writes and their
//! aggregate recompute, event creation with dates, user deletion with
//! aggregate repair), and translate repository results into the error
//! taxonomy of the API.

pub mod auth;
pub mod comment;
pub mod event;
pub mod favorite;
pub mod import;
pub mod token;
pub mod user;
pub mod venue;
