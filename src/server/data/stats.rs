use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::model::stats::{ServerInfo, ONLINE_WINDOW_SECS};

pub struct StatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts users, recently active users, topics and posts.
    ///
    /// # Arguments
    /// - `now` - Current unix time; users with `last_online` strictly after
    ///   `now - ONLINE_WINDOW_SECS` count as online
    pub async fn get_server_info(&self, now: i64) -> Result<ServerInfo, DbErr> {
        let users = entity::prelude::User::find().count(self.db).await?;

        let online = entity::prelude::User::find()
            .filter(entity::user::Column::LastOnline.gt(now - ONLINE_WINDOW_SECS))
            .count(self.db)
            .await?;

        let topics = entity::prelude::Topic::find().count(self.db).await?;
        let posts = entity::prelude::Post::find().count(self.db).await?;

        Ok(ServerInfo {
            users,
            online,
            topics,
            posts,
        })
    }
}
