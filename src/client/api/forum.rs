use reqwest::Method;

use crate::{
    client::model::error::ApiError,
    model::{
        api::ApiResponse,
        forum::{CreatePostDto, CreateTopicDto, ForumCategoryDto, ForumTopicDto, TopicDetailDto},
    },
};

use super::{
    finish,
    helper::{parse_empty_response, parse_response, send_request, serialize_json},
    ForumClient,
};

/// Query parameters of a topic listing. Page 0 is treated as the first page and
/// `category` is left out entirely when not given.
fn topic_query(category: Option<i64>, page: u32) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.max(1).to_string())];
    if let Some(category) = category {
        query.push(("category", category.to_string()));
    }
    query
}

impl ForumClient {
    /// Get all forum categories
    pub async fn get_forum_categories(&self) -> ApiResponse<Vec<ForumCategoryDto>> {
        finish("get_forum_categories", self.try_get_forum_categories().await)
    }

    async fn try_get_forum_categories(&self) -> Result<Vec<ForumCategoryDto>, ApiError> {
        let request = self.request(Method::GET, "/forum/categories", &[], None)?;
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// Get a page of topics, optionally restricted to one category
    ///
    /// # Arguments
    /// - `category` - Category id, or `None` for all categories
    /// - `page` - 1-based page number
    pub async fn get_forum_topics(
        &self,
        category: Option<i64>,
        page: u32,
    ) -> ApiResponse<Vec<ForumTopicDto>> {
        finish("get_forum_topics", self.try_get_forum_topics(category, page).await)
    }

    async fn try_get_forum_topics(
        &self,
        category: Option<i64>,
        page: u32,
    ) -> Result<Vec<ForumTopicDto>, ApiError> {
        let query = topic_query(category, page);
        let request = self.request(Method::GET, "/forum/topics", &query, None)?;
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// Get a topic together with its posts
    pub async fn get_forum_topic(&self, topic_id: i64) -> ApiResponse<TopicDetailDto> {
        finish("get_forum_topic", self.try_get_forum_topic(topic_id).await)
    }

    async fn try_get_forum_topic(&self, topic_id: i64) -> Result<TopicDetailDto, ApiError> {
        let path = format!("/forum/topics/{}", topic_id);
        let request = self.request(Method::GET, &path, &[], None)?;
        let response = send_request(request).await?;
        parse_response(response).await
    }

    /// Create a topic as the user owning `token`
    pub async fn create_forum_topic(
        &self,
        category_id: i64,
        title: &str,
        content: &str,
        token: &str,
    ) -> ApiResponse<()> {
        let payload = CreateTopicDto {
            category_id,
            title: title.to_string(),
            content: content.to_string(),
        };
        finish(
            "create_forum_topic",
            self.try_create(Method::POST, "/forum/topics", &payload, token)
                .await,
        )
    }

    /// Reply to a topic as the user owning `token`
    pub async fn create_forum_post(&self, topic_id: i64, content: &str, token: &str) -> ApiResponse<()> {
        let payload = CreatePostDto {
            topic_id,
            content: content.to_string(),
        };
        finish(
            "create_forum_post",
            self.try_create(Method::POST, "/forum/posts", &payload, token)
                .await,
        )
    }

    async fn try_create<T: serde::Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
        token: &str,
    ) -> Result<(), ApiError> {
        let body = serialize_json(payload)?;
        let request = self.request(method, path, &[], Some(token))?;
        let response = send_request(request.body(body)).await?;
        parse_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::topic_query;

    #[test]
    fn encodes_page_before_category() {
        assert_eq!(
            topic_query(Some(5), 2),
            vec![("page", "2".to_string()), ("category", "5".to_string())]
        );
    }

    #[test]
    fn omits_category_and_clamps_page_zero() {
        assert_eq!(topic_query(None, 0), vec![("page", "1".to_string())]);
    }
}
