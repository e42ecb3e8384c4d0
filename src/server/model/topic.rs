//! Forum topic domain models.

use crate::model::forum::ForumTopicDto;

/// Number of topics per page of the recent topics listing.
pub const TOPICS_PAGE_SIZE: u64 = 20;

/// A topic row joined with its creator and the last replier.
#[derive(Debug, Clone)]
pub struct TopicWithUsers {
    pub topic: entity::topic::Model,
    pub creator: Option<entity::user::Model>,
    pub last_replier: Option<entity::user::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForumTopic {
    pub id: i32,
    pub title: String,
    /// `None` when the creator account no longer exists.
    pub author: Option<String>,
    pub author_id: i32,
    pub created: i64,
    pub last_reply_created: Option<i64>,
    pub last_reply_username: Option<String>,
    pub posts: i32,
    pub views: i32,
    pub locked: bool,
    pub sticky: bool,
    pub forum_id: i32,
}

impl ForumTopic {
    pub fn from_with_users(rows: TopicWithUsers) -> Self {
        let TopicWithUsers {
            topic,
            creator,
            last_replier,
        } = rows;

        Self {
            id: topic.id,
            title: topic.topic_title,
            author: creator.map(|u| u.username),
            author_id: topic.topic_creator,
            created: topic.created,
            last_reply_created: topic.last_reply_created,
            last_reply_username: last_replier.map(|u| u.username),
            posts: topic.posts,
            views: topic.views,
            locked: topic.locked != 0,
            sticky: topic.sticky != 0,
            forum_id: topic.forum_id,
        }
    }

    pub fn into_dto(self) -> ForumTopicDto {
        ForumTopicDto {
            id: self.id as i64,
            title: self.title,
            author: self.author,
            author_id: Some(self.author_id as i64),
            created: self.created,
            last_reply_created: self.last_reply_created,
            last_reply_username: self.last_reply_username,
            posts: self.posts as i64,
            views: self.views as i64,
            locked: self.locked,
            sticky: self.sticky,
            forum_id: self.forum_id as i64,
        }
    }
}

/// Parses the `page` query parameter: missing, non-numeric or below 1 all mean page 1.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .map(|page| page as u64)
        .unwrap_or(1)
}
