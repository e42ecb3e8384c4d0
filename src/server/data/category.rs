use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::category::ForumWithActivity;

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets top-level forums (`parent = 0`) ordered by display order, each with
    /// its topic and post counts and its most recently active topic.
    ///
    /// Counts are aggregated in a single grouped query; only one topic row is
    /// read per forum.
    pub async fn get_top_level(&self) -> Result<Vec<ForumWithActivity>, DbErr> {
        let forums = entity::prelude::Forum::find()
            .filter(entity::forum::Column::Parent.eq(0))
            .order_by_asc(entity::forum::Column::ForumOrder)
            .order_by_asc(entity::forum::Column::Id)
            .all(self.db)
            .await?;

        if forums.is_empty() {
            return Ok(Vec::new());
        }

        let forum_ids: Vec<i32> = forums.iter().map(|f| f.id).collect();
        let mut counts = self.get_counts(forum_ids).await?;

        let mut categories = Vec::with_capacity(forums.len());
        for forum in forums {
            let (topics_count, posts_count) = counts.remove(&forum.id).unwrap_or((0, 0));
            let latest_topic = if topics_count > 0 {
                self.get_latest_topic(forum.id).await?
            } else {
                None
            };

            categories.push(ForumWithActivity {
                forum,
                topics_count,
                posts_count,
                latest_topic,
            });
        }

        Ok(categories)
    }

    /// Counts topics and sums their posts per forum. Forums without topics are absent.
    async fn get_counts(&self, forum_ids: Vec<i32>) -> Result<HashMap<i32, (i64, i64)>, DbErr> {
        // SUM is DECIMAL on MySQL; cast so both backends decode it as an integer
        let posts_sum = Expr::from(Func::cast_as(
            entity::topic::Column::Posts.sum(),
            "SIGNED",
        ));

        let rows: Vec<(i32, i64, Option<i64>)> = entity::prelude::Topic::find()
            .select_only()
            .column(entity::topic::Column::ForumId)
            .column_as(entity::topic::Column::Id.count(), "topics_count")
            .column_as(posts_sum, "posts_count")
            .filter(entity::topic::Column::ForumId.is_in(forum_ids))
            .group_by(entity::topic::Column::ForumId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(forum_id, topics, posts)| (forum_id, (topics, posts.unwrap_or(0))))
            .collect())
    }

    /// Gets the topic with the latest activity: its last reply, or its creation when unanswered.
    async fn get_latest_topic(&self, forum_id: i32) -> Result<Option<entity::topic::Model>, DbErr> {
        let last_activity = Func::coalesce([
            entity::topic::Column::LastReplyCreated.into_expr(),
            entity::topic::Column::Created.into_expr(),
        ]);

        entity::prelude::Topic::find()
            .filter(entity::topic::Column::ForumId.eq(forum_id))
            .order_by_desc(last_activity)
            .order_by_desc(entity::topic::Column::Id)
            .one(self.db)
            .await
    }
}
