//! Forum category domain models.
//!
//! A category is a top-level row of `nl2_forums`, enriched with counts and the
//! latest activity of its topics.

use crate::model::forum::{ForumCategoryDto, LatestPostDto};

/// Raw rows and aggregates the repository loads for one category.
#[derive(Debug, Clone)]
pub struct ForumWithActivity {
    pub forum: entity::forum::Model,
    pub topics_count: i64,
    pub posts_count: i64,
    /// Topic with the latest reply or creation time, `None` for an empty forum.
    pub latest_topic: Option<entity::topic::Model>,
}

/// Most recent activity inside a category.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestPost {
    pub topic_id: i32,
    pub topic_title: String,
    /// Author of the last reply, or of the topic when it has no replies.
    pub username: String,
    pub created: i64,
}

impl LatestPost {
    pub fn into_dto(self) -> LatestPostDto {
        LatestPostDto {
            id: self.topic_id as i64,
            topic_title: self.topic_title,
            username: self.username,
            created: self.created,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForumCategory {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub display_order: i32,
    /// `None` for top-level categories.
    pub parent_id: Option<i32>,
    pub latest_post: Option<LatestPost>,
    pub topics_count: i64,
    pub posts_count: i64,
}

impl ForumCategory {
    /// Converts a forum row and its aggregates into a category.
    ///
    /// # Arguments
    /// - `rows` - Forum row with its counts and most recently active topic
    /// - `username` - Resolves a user id to a username; `None` for deleted accounts
    pub fn from_with_activity<F>(rows: ForumWithActivity, username: F) -> Self
    where
        F: Fn(i32) -> Option<String>,
    {
        let ForumWithActivity {
            forum,
            topics_count,
            posts_count,
            latest_topic,
        } = rows;

        let latest_post = latest_topic.map(|t| {
            let (user_id, created) = match (t.last_reply_user, t.last_reply_created) {
                (Some(user), Some(created)) => (user, created),
                _ => (t.topic_creator, t.created),
            };

            LatestPost {
                topic_id: t.id,
                topic_title: t.topic_title,
                username: username(user_id).unwrap_or_default(),
                created,
            }
        });

        Self {
            id: forum.id,
            name: forum.forum_title,
            description: forum.forum_description.unwrap_or_default(),
            display_order: forum.forum_order,
            parent_id: (forum.parent != 0).then_some(forum.parent),
            latest_post,
            topics_count,
            posts_count,
        }
    }

    pub fn into_dto(self) -> ForumCategoryDto {
        ForumCategoryDto {
            id: self.id as i64,
            name: self.name,
            description: self.description,
            display_order: self.display_order as i64,
            parent_category_id: self.parent_id.map(i64::from),
            latest_post: self.latest_post.map(LatestPost::into_dto),
            topics_count: self.topics_count,
            posts_count: self.posts_count,
        }
    }
}
