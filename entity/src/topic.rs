use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "nl2_topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub forum_id: i32,
    pub topic_title: String,
    pub topic_creator: i32,
    /// Unix timestamp (seconds).
    pub created: i64,
    pub last_reply_created: Option<i64>,
    /// User id of the last poster.
    pub last_reply_user: Option<i32>,
    pub posts: i32,
    pub views: i32,
    pub locked: i8,
    pub sticky: i8,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::forum::Entity",
        from = "Column::ForumId",
        to = "super::forum::Column::Id"
    )]
    Forum,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TopicCreator",
        to = "super::user::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::forum::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Forum.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
