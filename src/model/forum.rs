use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::de;

/// Most recent activity shown next to a category.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct LatestPostDto {
    #[serde(deserialize_with = "de::number")]
    pub id: i64,
    pub topic_title: String,
    #[serde(default)]
    pub username: String,
    #[serde(deserialize_with = "de::number")]
    pub created: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ForumCategoryDto {
    #[serde(deserialize_with = "de::number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de::number")]
    pub display_order: i64,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::optional_number"
    )]
    pub parent_category_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_post: Option<LatestPostDto>,
    #[serde(default, deserialize_with = "de::number")]
    pub topics_count: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub posts_count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ForumTopicDto {
    #[serde(deserialize_with = "de::number")]
    pub id: i64,
    pub title: String,
    /// Username of the creator; absent when the account no longer exists.
    #[serde(default)]
    pub author: Option<String>,
    /// `None` when the creator account no longer exists.
    #[serde(default, deserialize_with = "de::optional_number")]
    pub author_id: Option<i64>,
    /// Creation time, unix seconds.
    #[serde(deserialize_with = "de::number")]
    pub created: i64,
    #[serde(default, deserialize_with = "de::optional_number")]
    pub last_reply_created: Option<i64>,
    /// Some deployments report the replier's user id here instead of a username.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub last_reply_username: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub posts: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub views: i64,
    #[serde(default, deserialize_with = "de::flag")]
    pub locked: bool,
    #[serde(default, deserialize_with = "de::flag")]
    pub sticky: bool,
    #[serde(deserialize_with = "de::number")]
    pub forum_id: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ForumPostDto {
    #[serde(deserialize_with = "de::number")]
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(deserialize_with = "de::number")]
    pub author_id: i64,
    #[serde(deserialize_with = "de::number")]
    pub created: i64,
    #[serde(deserialize_with = "de::number")]
    pub topic_id: i64,
}

/// A topic together with its posts.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TopicDetailDto {
    pub topic: ForumTopicDto,
    #[serde(default)]
    pub posts: Vec<ForumPostDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateTopicDto {
    pub category_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreatePostDto {
    pub topic_id: i64,
    pub content: String,
}
