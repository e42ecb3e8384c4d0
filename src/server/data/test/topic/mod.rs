use crate::server::{data::topic::TopicRepository, model::topic::TOPICS_PAGE_SIZE};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, topic::TopicFactory, user::UserFactory},
};

mod get_latest_page;
