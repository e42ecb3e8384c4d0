use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{data::stats::StatsRepository, error::AppError, model::stats::ServerInfo};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets user and forum counts as of now
    pub async fn get_server_info(&self) -> Result<ServerInfo, AppError> {
        let now = Utc::now().timestamp();

        Ok(StatsRepository::new(self.db).get_server_info(now).await?)
    }
}
