use crate::server::{
    data::stats::StatsRepository,
    model::stats::{ServerInfo, ONLINE_WINDOW_SECS},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod get_server_info;
