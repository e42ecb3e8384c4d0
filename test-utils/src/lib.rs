//! Nameless Bridge Test Utils
//!
//! Provides shared testing utilities for the forum endpoints. The crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases whose tables are
//! generated from the forum platform entities, plus factories for inserting forum rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for users, forums, topics and posts
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_topics() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_forum_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Insert rows with `factory`, then query...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
