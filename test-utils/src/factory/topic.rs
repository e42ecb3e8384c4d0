//! Topic factory for creating `nl2_topics` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test topics.
///
/// Requires an existing forum and creator user.
pub struct TopicFactory<'a> {
    db: &'a DatabaseConnection,
    forum_id: i32,
    creator_id: i32,
    title: String,
    created: i64,
    last_reply_created: Option<i64>,
    last_reply_user: Option<i32>,
    posts: i32,
    views: i32,
    locked: bool,
    sticky: bool,
}

impl<'a> TopicFactory<'a> {
    /// Creates a new TopicFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Topic {n}"`
    /// - created: now
    /// - no last reply
    /// - posts: `1`, views: `0`
    /// - neither locked nor sticky
    pub fn new(db: &'a DatabaseConnection, forum_id: i32, creator_id: i32) -> Self {
        let n = next_id();
        Self {
            db,
            forum_id,
            creator_id,
            title: format!("Topic {}", n),
            created: Utc::now().timestamp(),
            last_reply_created: None,
            last_reply_user: None,
            posts: 1,
            views: 0,
            locked: false,
            sticky: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the creation timestamp (unix seconds).
    pub fn created(mut self, created: i64) -> Self {
        self.created = created;
        self
    }

    /// Sets the last reply author and timestamp.
    pub fn last_reply(mut self, user_id: i32, created: i64) -> Self {
        self.last_reply_user = Some(user_id);
        self.last_reply_created = Some(created);
        self
    }

    pub fn posts(mut self, posts: i32) -> Self {
        self.posts = posts;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Builds and inserts the topic row.
    pub async fn build(self) -> Result<entity::topic::Model, DbErr> {
        entity::topic::ActiveModel {
            forum_id: ActiveValue::Set(self.forum_id),
            topic_title: ActiveValue::Set(self.title),
            topic_creator: ActiveValue::Set(self.creator_id),
            created: ActiveValue::Set(self.created),
            last_reply_created: ActiveValue::Set(self.last_reply_created),
            last_reply_user: ActiveValue::Set(self.last_reply_user),
            posts: ActiveValue::Set(self.posts),
            views: ActiveValue::Set(self.views),
            locked: ActiveValue::Set(self.locked as i8),
            sticky: ActiveValue::Set(self.sticky as i8),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a topic with default values in the given forum.
pub async fn create_topic(
    db: &DatabaseConnection,
    forum_id: i32,
    creator_id: i32,
) -> Result<entity::topic::Model, DbErr> {
    TopicFactory::new(db, forum_id, creator_id).build().await
}
