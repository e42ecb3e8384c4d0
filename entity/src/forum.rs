use sea_orm::entity::prelude::*;

/// A forum (category) row. Top-level categories have `parent = 0`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "nl2_forums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub forum_title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub forum_description: Option<String>,
    pub forum_order: i32,
    pub parent: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::topic::Entity")]
    Topic,
}

impl Related<super::topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
