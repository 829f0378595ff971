use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Venue};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Venue)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for comment and favorite operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Venue
    /// - Comment
    /// - Favorite
    ///
    /// Use this when testing comment or favorite functionality that doesn't involve
    /// events. For tests involving events, use `with_directory_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_venue_tables(self) -> Self {
        self.with_table(User)
            .with_table(Venue)
            .with_table(Comment)
            .with_table(Favorite)
    }

    /// Adds every table in the directory schema.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Venue
    /// - Comment
    /// - Favorite
    /// - Event
    /// - EventDate
    ///
    /// This is equivalent to calling `with_venue_tables()` followed by
    /// `with_table(Event)` and `with_table(EventDate)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_directory_tables(self) -> Self {
        self.with_venue_tables()
            .with_table(Event)
            .with_table(EventDate)
    }

    /// Builds the configured test context.
    ///
    /// Creates the in-memory SQLite database and executes every CREATE TABLE
    /// statement added through the builder, in insertion order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and schema ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
