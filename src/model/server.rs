use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::de;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserStatsDto {
    #[serde(deserialize_with = "de::number")]
    pub count: i64,
    /// Users active within the online window.
    #[serde(deserialize_with = "de::number")]
    pub online: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ForumStatsDto {
    #[serde(deserialize_with = "de::number")]
    pub topics: i64,
    #[serde(deserialize_with = "de::number")]
    pub posts: i64,
}

/// Aggregate counts shown on the forum landing page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ServerInfoDto {
    pub users: UserStatsDto,
    pub forum: ForumStatsDto,
}
