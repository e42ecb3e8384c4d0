use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets users by ID, keyed by ID. Unknown IDs are simply absent from the map.
    pub async fn get_by_ids(
        &self,
        mut ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::user::Model>, DbErr> {
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect())
    }
}
