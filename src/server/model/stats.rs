use crate::model::server::{ForumStatsDto, ServerInfoDto, UserStatsDto};

/// Users seen within this many seconds count as online.
pub const ONLINE_WINDOW_SECS: i64 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServerInfo {
    pub users: u64,
    pub online: u64,
    pub topics: u64,
    pub posts: u64,
}

impl ServerInfo {
    pub fn into_dto(self) -> ServerInfoDto {
        ServerInfoDto {
            users: UserStatsDto {
                count: self.users as i64,
                online: self.online as i64,
            },
            forum: ForumStatsDto {
                topics: self.topics as i64,
                posts: self.posts as i64,
            },
        }
    }
}
