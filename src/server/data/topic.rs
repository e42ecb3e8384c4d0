use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

use crate::server::{
    data::user::UserRepository,
    model::topic::{TopicWithUsers, TOPICS_PAGE_SIZE},
};

pub struct TopicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TopicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of topics, newest first, with creator and last replier.
    ///
    /// # Arguments
    /// - `page` - 1-based page number; 0 is treated as 1
    ///
    /// # Returns
    /// - `Ok(Vec<TopicWithUsers>)` - Up to `TOPICS_PAGE_SIZE` topics; empty past the last page
    /// - `Err(DbErr)` - Database error
    pub async fn get_latest_page(&self, page: u64) -> Result<Vec<TopicWithUsers>, DbErr> {
        // Offsets beyond i64 cannot be bound by every backend and are past any real page
        let Some(offset) = (page.max(1) - 1)
            .checked_mul(TOPICS_PAGE_SIZE)
            .filter(|offset| *offset <= i64::MAX as u64)
        else {
            return Ok(Vec::new());
        };

        let rows = entity::prelude::Topic::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::topic::Column::Created)
            .order_by_desc(entity::topic::Column::Id)
            .limit(TOPICS_PAGE_SIZE)
            .offset(offset)
            .all(self.db)
            .await?;

        let replier_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(topic, _)| topic.last_reply_user)
            .collect();
        let repliers = UserRepository::new(self.db).get_by_ids(replier_ids).await?;

        Ok(rows
            .into_iter()
            .map(|(topic, creator)| {
                let last_replier = topic
                    .last_reply_user
                    .and_then(|id| repliers.get(&id).cloned());

                TopicWithUsers {
                    topic,
                    creator,
                    last_replier,
                }
            })
            .collect())
    }
}
