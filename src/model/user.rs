use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use super::de;

/// Snapshot of a forum account as reported by the forum platform.
///
/// Replaced wholesale on every login or validation; never patched field by field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct UserDto {
    #[serde(deserialize_with = "de::number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub displayname: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "de::number")]
    pub group_id: i64,
    #[serde(default)]
    pub group_name: String,
    /// Registration time, unix seconds.
    #[serde(default, deserialize_with = "de::number")]
    pub registered: i64,
    #[serde(default, deserialize_with = "de::number")]
    pub profile_views: i64,
    /// Last activity, unix seconds.
    #[serde(default, deserialize_with = "de::number")]
    pub last_online: i64,
    #[serde(default, deserialize_with = "de::flag")]
    pub exists: bool,
    #[serde(default, deserialize_with = "de::flag")]
    pub validated: bool,
    #[serde(default, deserialize_with = "de::number")]
    pub reputation: i64,
    #[serde(default)]
    pub avatar: String,
}

impl UserDto {
    /// Name to show for the user, falling back to the username.
    pub fn display_name(&self) -> &str {
        if self.displayname.is_empty() {
            &self.username
        } else {
            &self.displayname
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login. The platform may not issue a token.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LoginResultDto {
    pub user: UserDto,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
}
