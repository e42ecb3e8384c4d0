use crate::model::user::UserDto;

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// No session, or the last one was cleared
    Anonymous,
    /// A persisted token is being checked with the forum platform
    Validating {
        token: String,
        /// User saved alongside the token, shown until validation finishes
        cached_user: Option<UserDto>,
    },
    /// Logged in
    Authenticated {
        user: UserDto,
        /// `None` when the platform did not issue a token on login
        token: Option<String>,
    },
}

/// Snapshot of the client session handed out to callers.
///
/// Owned and written only by [`SessionManager`](crate::client::session::SessionManager);
/// callers receive clones.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub state: AuthState,
    /// An auth operation is in flight
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: AuthState::Anonymous,
            loading: false,
        }
    }
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated { .. })
    }

    pub fn is_validating(&self) -> bool {
        matches!(self.state, AuthState::Validating { .. })
    }

    /// The current user, including the cached one shown while validating.
    pub fn user(&self) -> Option<&UserDto> {
        match &self.state {
            AuthState::Authenticated { user, .. } => Some(user),
            AuthState::Validating { cached_user, .. } => cached_user.as_ref(),
            AuthState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated { token, .. } => token.as_deref(),
            AuthState::Validating { token, .. } => Some(token),
            AuthState::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }
}
