//! Forum factory for creating `nl2_forums` rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test forums (categories).
///
/// Forums default to top-level (`parent = 0`).
pub struct ForumFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    order: i32,
    parent: i32,
}

impl<'a> ForumFactory<'a> {
    /// Creates a new ForumFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Forum {n}"`
    /// - description: `Some("Description {n}")`
    /// - order: `1`
    /// - parent: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            title: format!("Forum {}", n),
            description: Some(format!("Description {}", n)),
            order: 1,
            parent: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets the parent forum id; `0` makes the forum a top-level category.
    pub fn parent(mut self, parent: i32) -> Self {
        self.parent = parent;
        self
    }

    /// Builds and inserts the forum row.
    pub async fn build(self) -> Result<entity::forum::Model, DbErr> {
        entity::forum::ActiveModel {
            forum_title: ActiveValue::Set(self.title),
            forum_description: ActiveValue::Set(self.description),
            forum_order: ActiveValue::Set(self.order),
            parent: ActiveValue::Set(self.parent),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level forum with default values.
pub async fn create_forum(db: &DatabaseConnection) -> Result<entity::forum::Model, DbErr> {
    ForumFactory::new(db).build().await
}
