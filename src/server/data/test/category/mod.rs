use crate::server::data::category::CategoryRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, forum::ForumFactory, topic::TopicFactory},
};

mod get_top_level;
