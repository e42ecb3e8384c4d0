//! Factory methods for creating forum rows in tests.
//!
//! Each table has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories insert into the database; create
//! users before the topics and posts that reference them.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let forum = factory::forum::create_forum(&db).await?;
//! let topic = factory::topic::TopicFactory::new(&db, forum.id, user.id)
//!     .title("Server rules")
//!     .posts(3)
//!     .build()
//!     .await?;
//! ```

pub mod forum;
pub mod helpers;
pub mod post;
pub mod topic;
pub mod user;
