//! Composite load of the forum landing view.

use crate::{
    client::api::ForumClient,
    model::{
        api::ApiResponse,
        forum::{ForumCategoryDto, ForumTopicDto},
        server::ServerInfoDto,
    },
};

/// Number of topics shown in the recent topics list.
pub const RECENT_TOPIC_LIMIT: usize = 10;

/// Display state of one listing on the forum landing view.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    /// Loaded fine, nothing to show.
    Empty,
    /// The request failed with this message.
    Unavailable(String),
}

impl<T> From<ApiResponse<Vec<T>>> for Listing<T> {
    fn from(response: ApiResponse<Vec<T>>) -> Self {
        match response.into_result() {
            Ok(items) if items.is_empty() => Listing::Empty,
            Ok(items) => Listing::Items(items),
            Err(error) => Listing::Unavailable(error),
        }
    }
}

/// Everything the forum landing view shows. Each part loads independently,
/// so one failing request does not hide the others.
#[derive(Clone, Debug, PartialEq)]
pub struct ForumOverview {
    pub categories: ApiResponse<Vec<ForumCategoryDto>>,
    /// First page of topics, truncated to [`RECENT_TOPIC_LIMIT`].
    pub recent_topics: ApiResponse<Vec<ForumTopicDto>>,
    pub stats: ApiResponse<ServerInfoDto>,
}

impl ForumOverview {
    pub fn category_listing(&self) -> Listing<ForumCategoryDto> {
        self.categories.clone().into()
    }

    pub fn topic_listing(&self) -> Listing<ForumTopicDto> {
        self.recent_topics.clone().into()
    }
}

/// Loads categories, recent topics and statistics concurrently.
pub async fn load_forum_overview(client: &ForumClient) -> ForumOverview {
    let (categories, topics, stats) = tokio::join!(
        client.get_forum_categories(),
        client.get_forum_topics(None, 1),
        client.get_server_info(),
    );

    let recent_topics = topics.map(|mut topics| {
        topics.truncate(RECENT_TOPIC_LIMIT);
        topics
    });

    ForumOverview {
        categories,
        recent_topics,
        stats,
    }
}
