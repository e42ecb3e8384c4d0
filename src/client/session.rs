//! Session/auth manager.
//!
//! [`SessionManager`] is the only writer of the client [`Session`]. Callers read
//! snapshots through [`SessionManager::session`] or follow changes with
//! [`SessionManager::subscribe`].
//!
//! Only one of restore, login and register runs at a time; a second call fails
//! immediately with [`ValidationError::AuthInProgress`]. Logout is always
//! allowed and wins over an operation still in flight: that operation's result
//! is discarded when it completes.

use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use tokio::sync::{watch, Mutex};

use crate::{
    client::{
        api::ForumClient,
        config::ClientConfig,
        model::{
            auth::{AuthState, Session},
            error::ValidationError,
            storage::{FileStore, MemoryStore, SessionStore, TOKEN_KEY, USER_KEY},
        },
    },
    model::{api::ApiResponse, user::UserDto},
};

/// Minimum accepted password length on registration.
pub const MIN_PASSWORD_LEN: usize = 6;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Registration input as entered by the user.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Checks the form locally, in the order the user is told about problems.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ValidationError::MissingRegistrationFields);
        }
        Ok(())
    }
}

pub struct SessionManager {
    client: ForumClient,
    store: Arc<dyn SessionStore>,
    state: watch::Sender<Session>,
    in_flight: Mutex<()>,
    /// Bumped by every logout. Held while a finished operation commits its result,
    /// so a logout lands either before or after the whole commit.
    epoch: StdMutex<u64>,
}

impl SessionManager {
    pub fn new(client: ForumClient, store: Arc<dyn SessionStore>) -> Self {
        Self {
            client,
            store,
            state: watch::Sender::new(Session::default()),
            in_flight: Mutex::new(()),
            epoch: StdMutex::new(0),
        }
    }

    /// Builds a manager from configuration, persisting to `session_dir` when set
    /// and keeping the session in memory otherwise.
    pub fn from_config(config: ClientConfig) -> Self {
        let store: Arc<dyn SessionStore> = match &config.session_dir {
            Some(dir) => Arc::new(FileStore::new(dir)),
            None => Arc::new(MemoryStore::new()),
        };

        Self::new(ForumClient::new(config), store)
    }

    pub fn client(&self) -> &ForumClient {
        &self.client
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    /// Hydrates the session from storage and validates the persisted token.
    ///
    /// # Returns
    /// - `success` with `Some(user)` - The token was valid; the session is authenticated
    /// - `success` with `None` - Nothing was persisted; the session is anonymous
    /// - failure - Validation failed and the persisted session was cleared, or
    ///   another auth operation is in flight
    pub async fn restore(&self) -> ApiResponse<Option<UserDto>> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            return ApiResponse::failure(ValidationError::AuthInProgress.to_string());
        };

        let Some(token) = self.read(TOKEN_KEY) else {
            self.clear_persisted();
            self.state.send_replace(Session::default());
            return ApiResponse::ok(None);
        };

        let cached_user = self
            .read(USER_KEY)
            .and_then(|json| serde_json::from_str::<UserDto>(&json).ok());

        let epoch = {
            let epoch = self.lock_epoch();
            self.state.send_replace(Session {
                state: AuthState::Validating {
                    token: token.clone(),
                    cached_user,
                },
                loading: true,
            });
            *epoch
        };

        let response = self.client.validate_user(&token).await;

        self.commit(epoch, || match response.into_result() {
            Ok(user) => {
                self.write(USER_KEY, &user);
                self.state.send_replace(Session {
                    state: AuthState::Authenticated {
                        user: user.clone(),
                        token: Some(token),
                    },
                    loading: false,
                });
                ApiResponse::ok(Some(user))
            }
            Err(error) => {
                tracing::warn!("Persisted session is no longer valid: {}", error);
                self.clear_persisted();
                self.state.send_replace(Session::default());
                ApiResponse::failure(error)
            }
        })
        .unwrap_or_else(|| ApiResponse::failure(ValidationError::Superseded.to_string()))
    }

    /// Logs in and persists the session.
    ///
    /// A failed login leaves the current session untouched.
    pub async fn login(&self, username: &str, password: &str) -> ApiResponse<UserDto> {
        if username.trim().is_empty() || password.is_empty() {
            return ApiResponse::failure(ValidationError::MissingCredentials.to_string());
        }

        let Ok(_guard) = self.in_flight.try_lock() else {
            return ApiResponse::failure(ValidationError::AuthInProgress.to_string());
        };

        let epoch = *self.lock_epoch();
        self.set_loading(true);

        let response = self.client.login(username, password).await;

        self.set_loading(false);

        let ApiResponse {
            success,
            data,
            error,
        } = response;

        self.commit(epoch, || match data.filter(|_| success) {
            Some(login) => {
                match &login.token {
                    Some(token) => self.write_raw(TOKEN_KEY, token),
                    None => self.remove(TOKEN_KEY),
                }
                self.write(USER_KEY, &login.user);

                self.state.send_replace(Session {
                    state: AuthState::Authenticated {
                        user: login.user.clone(),
                        token: login.token,
                    },
                    loading: false,
                });

                tracing::info!("Logged in as {}", login.user.username);
                ApiResponse::ok(login.user)
            }
            None => ApiResponse::failure(error.unwrap_or_else(|| LOGIN_FAILED.to_string())),
        })
        .unwrap_or_else(|| ApiResponse::failure(ValidationError::Superseded.to_string()))
    }

    /// Registers a new account. Does not log in.
    pub async fn register(&self, form: &RegisterForm) -> ApiResponse<()> {
        if let Err(err) = form.validate() {
            return ApiResponse::failure(err.to_string());
        }

        let Ok(_guard) = self.in_flight.try_lock() else {
            return ApiResponse::failure(ValidationError::AuthInProgress.to_string());
        };

        self.set_loading(true);
        let response = self
            .client
            .register(form.username.trim(), form.email.trim(), &form.password)
            .await;
        self.set_loading(false);

        if response.is_success() {
            ApiResponse::ok(())
        } else {
            ApiResponse::failure(
                response
                    .error
                    .unwrap_or_else(|| REGISTRATION_FAILED.to_string()),
            )
        }
    }

    /// Clears the session and its persisted copy. Makes no network call.
    pub fn logout(&self) {
        let mut epoch = self.lock_epoch();
        *epoch += 1;
        self.clear_persisted();
        self.state.send_replace(Session::default());
    }

    /// Creates a topic as the logged-in user.
    pub async fn create_topic(
        &self,
        category_id: Option<i64>,
        title: &str,
        content: &str,
    ) -> ApiResponse<()> {
        let session = self.session();
        let (Some(category_id), Some(token)) = (category_id, session.token()) else {
            return ApiResponse::failure(ValidationError::NotReadyToPost.to_string());
        };
        if !session.is_authenticated() {
            return ApiResponse::failure(ValidationError::NotReadyToPost.to_string());
        }
        if title.trim().is_empty() || content.trim().is_empty() {
            return ApiResponse::failure(ValidationError::EmptyContent.to_string());
        }

        self.client
            .create_forum_topic(category_id, title.trim(), content.trim(), token)
            .await
    }

    /// Replies to a topic as the logged-in user.
    pub async fn create_post(&self, topic_id: i64, content: &str) -> ApiResponse<()> {
        let session = self.session();
        let Some(token) = session.token().filter(|_| session.is_authenticated()) else {
            return ApiResponse::failure(ValidationError::NotLoggedIn.to_string());
        };
        if content.trim().is_empty() {
            return ApiResponse::failure(ValidationError::EmptyContent.to_string());
        }

        self.client
            .create_forum_post(topic_id, content.trim(), token)
            .await
    }

    fn lock_epoch(&self) -> MutexGuard<'_, u64> {
        self.epoch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `apply` unless a logout happened since `epoch` was read.
    fn commit<T>(&self, epoch: u64, apply: impl FnOnce() -> T) -> Option<T> {
        let current = self.lock_epoch();
        (*current == epoch).then(apply)
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|session| session.loading = loading);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(err) => {
                tracing::warn!("Failed to read session key {}: {}", key, err);
                None
            }
        }
    }

    fn write(&self, key: &str, user: &UserDto) {
        match serde_json::to_string(user) {
            Ok(json) => self.write_raw(key, &json),
            Err(err) => tracing::warn!("Failed to serialize session user: {}", err),
        }
    }

    fn write_raw(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            tracing::warn!("Failed to persist session key {}: {}", key, err);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key) {
            tracing::warn!("Failed to clear session key {}: {}", key, err);
        }
    }

    /// Token and user are always cleared together.
    fn clear_persisted(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::client::test_support::StubPlatform;

    fn user_json() -> serde_json::Value {
        json!({
            "id": 7,
            "username": "steve",
            "displayname": "Steve",
            "group_id": "1",
            "validated": 1
        })
    }

    fn setup(stub: &StubPlatform) -> (SessionManager, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionManager::new(stub.client(), store.clone()), store)
    }

    fn register_form(password: &str, confirm: &str) -> RegisterForm {
        RegisterForm {
            username: "alex".to_string(),
            email: "alex@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    /// Tests login with rejected credentials.
    ///
    /// Expected: failure with the platform's message, session stays anonymous
    /// and nothing is persisted
    #[tokio::test]
    async fn invalid_login_stays_anonymous() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/login",
            401,
            json!({ "success": false, "error": "Invalid username or password" }),
        );
        let (manager, store) = setup(&stub);

        let result = manager.login("steve", "wrong").await;

        assert!(!result.success);
        assert_eq!(result.error_message(), Some("Invalid username or password"));
        assert_eq!(manager.session(), Session::default());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    /// Tests login with a failure body carrying no message.
    ///
    /// Expected: the status fallback text, never an empty error
    #[tokio::test]
    async fn login_failure_without_message_uses_status_text() {
        let stub = StubPlatform::start().await;
        stub.respond("POST", "/auth/login", 500, json!({}));
        let (manager, _) = setup(&stub);

        let result = manager.login("steve", "secret").await;

        assert_eq!(result.error_message(), Some("HTTP error! status: 500"));
    }

    /// Tests successful login.
    ///
    /// Expected: authenticated session, persisted token and user equal the
    /// values the platform returned
    #[tokio::test]
    async fn successful_login_persists_session() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json(), "token": "tok-123" } }),
        );
        let (manager, store) = setup(&stub);

        let result = manager.login("steve", "secret").await;

        assert!(result.success);
        let user = result.data.unwrap();
        assert_eq!(user.id, 7);

        let session = manager.session();
        assert!(session.is_authenticated());
        assert!(!session.loading);
        assert_eq!(session.token(), Some("tok-123"));

        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-123"));
        let persisted: UserDto = serde_json::from_str(&store.get(USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, user);

        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].json()["username"], "steve");
    }

    /// Tests login when the platform issues no token.
    ///
    /// Expected: authenticated without a token and a stale token is removed
    #[tokio::test]
    async fn login_without_token_clears_stale_token() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json() } }),
        );
        let (manager, store) = setup(&stub);
        store.set(TOKEN_KEY, "stale").unwrap();

        let result = manager.login("steve", "secret").await;

        assert!(result.success);
        assert!(manager.session().is_authenticated());
        assert_eq!(manager.session().token(), None);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert!(store.get(USER_KEY).unwrap().is_some());
    }

    /// Tests login with empty credentials.
    ///
    /// Expected: rejected locally without a request
    #[tokio::test]
    async fn empty_credentials_rejected_locally() {
        let stub = StubPlatform::start().await;
        let (manager, _) = setup(&stub);

        let result = manager.login("  ", "secret").await;

        assert_eq!(
            result.error_message(),
            Some("Please enter your username and password")
        );
        assert!(stub.requests().is_empty());
    }

    /// Tests logout after a successful login.
    ///
    /// Expected: persisted token and user cleared, anonymous session, no request sent
    #[tokio::test]
    async fn logout_clears_without_network_call() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json(), "token": "tok" } }),
        );
        let (manager, store) = setup(&stub);
        manager.login("steve", "secret").await;
        let mut updates = manager.subscribe();

        manager.logout();

        assert_eq!(manager.session(), Session::default());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
        assert_eq!(stub.requests().len(), 1);
        assert!(updates.has_changed().unwrap());
        assert!(!updates.borrow_and_update().is_authenticated());
    }

    /// Tests logout from an anonymous session.
    ///
    /// Expected: stray persisted entries are cleared anyway
    #[tokio::test]
    async fn logout_when_anonymous_clears_storage() {
        let stub = StubPlatform::start().await;
        let (manager, store) = setup(&stub);
        store.set(USER_KEY, "{}").unwrap();

        manager.logout();

        assert_eq!(store.get(USER_KEY).unwrap(), None);
        assert!(stub.requests().is_empty());
    }

    /// Tests registration with mismatched or short passwords.
    ///
    /// Expected: rejected locally with the matching message, no request sent
    #[tokio::test]
    async fn register_rejects_locally() {
        let stub = StubPlatform::start().await;
        let (manager, _) = setup(&stub);

        let mismatch = manager.register(&register_form("secret1", "secret2")).await;
        let short = manager.register(&register_form("abc", "abc")).await;

        assert_eq!(mismatch.error_message(), Some("Passwords do not match!"));
        assert_eq!(
            short.error_message(),
            Some("Password must be at least 6 characters long!")
        );
        assert!(stub.requests().is_empty());
    }

    /// Tests a registration accepted by the platform.
    ///
    /// Expected: success and the session stays anonymous
    #[tokio::test]
    async fn register_does_not_log_in() {
        let stub = StubPlatform::start().await;
        stub.respond("POST", "/auth/register", 200, json!({ "success": true }));
        let (manager, _) = setup(&stub);

        let result = manager.register(&register_form("secret1", "secret1")).await;

        assert!(result.success);
        assert!(!manager.session().is_authenticated());
        let body = stub.requests()[0].json();
        assert_eq!(body["email"], "alex@example.com");
        assert!(body.get("confirm_password").is_none());
    }

    /// Tests restoring a persisted, still valid token.
    ///
    /// Expected: token sent as bearer, session authenticated with the fresh user
    #[tokio::test]
    async fn restore_validates_persisted_token() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/validate",
            200,
            json!({ "success": true, "data": user_json() }),
        );
        let (manager, store) = setup(&stub);
        store.set(TOKEN_KEY, "tok").unwrap();

        let result = manager.restore().await;

        assert_eq!(result.data.flatten().map(|u| u.id), Some(7));
        let session = manager.session();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(
            stub.requests()[0].authorization.as_deref(),
            Some("Bearer tok")
        );
        assert!(store.get(USER_KEY).unwrap().is_some());
    }

    /// Tests restoring a token the platform rejects.
    ///
    /// Expected: anonymous session, persisted token and user cleared
    #[tokio::test]
    async fn restore_clears_rejected_token() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/validate",
            401,
            json!({ "success": false, "message": "Invalid token" }),
        );
        let (manager, store) = setup(&stub);
        store.set(TOKEN_KEY, "expired").unwrap();
        store.set(USER_KEY, &user_json().to_string()).unwrap();

        let result = manager.restore().await;

        assert_eq!(result.error_message(), Some("Invalid token"));
        assert_eq!(manager.session(), Session::default());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    /// Tests restoring with nothing persisted.
    ///
    /// Expected: anonymous success without a request
    #[tokio::test]
    async fn restore_without_token_is_anonymous() {
        let stub = StubPlatform::start().await;
        let (manager, _) = setup(&stub);

        let result = manager.restore().await;

        assert!(result.success);
        assert_eq!(result.data, Some(None));
        assert!(stub.requests().is_empty());
    }

    /// Tests a second login while the first is still waiting on the platform.
    ///
    /// Expected: the second call fails immediately, the first completes
    #[tokio::test]
    async fn concurrent_auth_operations_are_rejected() {
        let stub = StubPlatform::start().await;
        stub.respond_after(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json(), "token": "tok" } }),
            Duration::from_millis(200),
        );
        let (manager, _) = setup(&stub);

        let (first, second) = tokio::join!(
            manager.login("steve", "secret"),
            manager.login("steve", "secret")
        );

        assert!(first.success);
        assert_eq!(
            second.error_message(),
            Some("Another authentication request is already in progress")
        );
        assert_eq!(stub.requests().len(), 1);
    }

    /// Tests logout while a login is in flight.
    ///
    /// Expected: the login result is discarded and nothing is persisted
    #[tokio::test]
    async fn logout_supersedes_in_flight_login() {
        let stub = StubPlatform::start().await;
        stub.respond_after(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json(), "token": "tok" } }),
            Duration::from_millis(200),
        );
        let (manager, store) = setup(&stub);

        let (login, ()) = tokio::join!(manager.login("steve", "secret"), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            manager.logout();
        });

        assert!(!login.success);
        assert_eq!(manager.session(), Session::default());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    /// Tests posting without a logged-in session.
    ///
    /// Expected: rejected locally without a request
    #[tokio::test]
    async fn posting_requires_login() {
        let stub = StubPlatform::start().await;
        let (manager, _) = setup(&stub);

        let topic = manager.create_topic(Some(1), "Hello", "World").await;
        let post = manager.create_post(3, "Reply").await;

        assert_eq!(
            topic.error_message(),
            Some("Please select a category and ensure you're logged in")
        );
        assert_eq!(post.error_message(), Some("You must be logged in to reply"));
        assert!(stub.requests().is_empty());
    }

    /// Tests creating a topic while logged in.
    ///
    /// Expected: the session token is sent as bearer with the topic payload
    #[tokio::test]
    async fn create_topic_uses_session_token() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json(), "token": "tok" } }),
        )
        .respond("POST", "/forum/topics", 200, json!({ "success": true }));
        let (manager, _) = setup(&stub);
        manager.login("steve", "secret").await;

        let result = manager.create_topic(Some(4), " Hello ", "World").await;

        assert!(result.success);
        let request = &stub.requests()[1];
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
        assert_eq!(request.json()["category_id"], 4);
        assert_eq!(request.json()["title"], "Hello");
    }

    /// Tests logout while a persisted token is being validated.
    ///
    /// Expected: the validation result is discarded, the session stays anonymous
    /// and the persisted entries stay cleared
    #[tokio::test]
    async fn logout_supersedes_in_flight_restore() {
        let stub = StubPlatform::start().await;
        stub.respond_after(
            "POST",
            "/auth/validate",
            200,
            json!({ "success": true, "data": user_json() }),
            Duration::from_millis(200),
        );
        let (manager, store) = setup(&stub);
        store.set(TOKEN_KEY, "tok").unwrap();

        let (restore, ()) = tokio::join!(manager.restore(), async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            manager.logout();
        });

        assert_eq!(
            restore.error_message(),
            Some("Logged out before the request completed")
        );
        assert_eq!(manager.session(), Session::default());
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    /// Tests replying to a topic while logged in.
    ///
    /// Expected: the session token is sent as bearer with the trimmed reply
    #[tokio::test]
    async fn create_post_uses_session_token() {
        let stub = StubPlatform::start().await;
        stub.respond(
            "POST",
            "/auth/login",
            200,
            json!({ "success": true, "data": { "user": user_json(), "token": "tok" } }),
        )
        .respond("POST", "/forum/posts", 200, json!({ "success": true }));
        let (manager, _) = setup(&stub);
        manager.login("steve", "secret").await;

        let result = manager.create_post(12, "  Nice topic ").await;

        assert!(result.success);
        let request = &stub.requests()[1];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/forum/posts");
        assert_eq!(request.authorization.as_deref(), Some("Bearer tok"));
        assert_eq!(request.json(), json!({ "topic_id": 12, "content": "Nice topic" }));
    }
}
