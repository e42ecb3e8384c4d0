//! User factory for creating `nl2_users` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("Steve")
///     .last_online(0)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    nickname: String,
    last_online: i64,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{n}"`
    /// - nickname: `"User {n}"`
    /// - last_online: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            username: format!("user_{}", n),
            nickname: format!("User {}", n),
            last_online: Utc::now().timestamp(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the last activity timestamp (unix seconds).
    pub fn last_online(mut self, last_online: i64) -> Self {
        self.last_online = last_online;
        self
    }

    /// Builds and inserts the user row.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            nickname: ActiveValue::Set(self.nickname),
            last_online: ActiveValue::Set(self.last_online),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
