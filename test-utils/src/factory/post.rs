//! Post factory for creating `nl2_posts` rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a post in the given topic.
///
/// # Arguments
/// - `db` - Database connection
/// - `topic_id` - Topic the post belongs to
/// - `creator_id` - Author user id
/// - `content` - Post body
///
/// # Returns
/// - `Ok(entity::post::Model)` - Created post
/// - `Err(DbErr)` - Database error during insert
pub async fn create_post(
    db: &DatabaseConnection,
    topic_id: i32,
    creator_id: i32,
    content: &str,
) -> Result<entity::post::Model, DbErr> {
    entity::post::ActiveModel {
        topic_id: ActiveValue::Set(topic_id),
        post_creator: ActiveValue::Set(creator_id),
        post_content: ActiveValue::Set(content.to_string()),
        created: ActiveValue::Set(Utc::now().timestamp()),
        ..Default::default()
    }
    .insert(db)
    .await
}
