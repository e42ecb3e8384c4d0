use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, topic::TopicRepository, user::UserRepository},
    error::AppError,
    model::{category::ForumCategory, topic::ForumTopic},
};

pub struct ForumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets top-level categories with topic and post counts and their latest activity
    pub async fn get_categories(&self) -> Result<Vec<ForumCategory>, AppError> {
        let rows = CategoryRepository::new(self.db).get_top_level().await?;

        let user_ids: Vec<i32> = rows
            .iter()
            .filter_map(|row| row.latest_topic.as_ref())
            .flat_map(|t| [Some(t.topic_creator), t.last_reply_user])
            .flatten()
            .collect();
        let users = UserRepository::new(self.db).get_by_ids(user_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                ForumCategory::from_with_activity(row, |id| {
                    users.get(&id).map(|u| u.username.clone())
                })
            })
            .collect())
    }

    /// Gets one page of the most recent topics
    pub async fn get_latest_topics(&self, page: u64) -> Result<Vec<ForumTopic>, AppError> {
        let rows = TopicRepository::new(self.db).get_latest_page(page).await?;

        Ok(rows.into_iter().map(ForumTopic::from_with_users).collect())
    }
}
