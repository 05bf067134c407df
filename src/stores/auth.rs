use crate::api::ApiClient;
use crate::auth;
use crate::error::UserFacingError;
use crate::services;
use crate::storage::{SessionStorage, TOKEN_KEY};
use crate::types::{LoginRequest, LoginResponse, UserRequest, UserResponse};

/// Profile of the signed-in user, filled from either the login response or
/// a later profile fetch.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub position: Option<String>,
}

impl From<&LoginResponse> for UserProfile {
    fn from(response: &LoginResponse) -> Self {
        Self {
            id: response.id,
            first_name: response.first_name.clone(),
            last_name: response.last_name.clone(),
            email: response.email.clone(),
            position: response.position.clone(),
        }
    }
}

impl From<UserResponse> for UserProfile {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            email: user.email,
            position: Some(user.position.as_str().to_string()),
        }
    }
}

/// Session state. The token is mirrored to the session file under the fixed
/// `"token"` key so a new process can restore it.
pub struct AuthStore {
    api: ApiClient,
    storage: SessionStorage,
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub is_loading: bool,
    pub error: Option<UserFacingError>,
    pending_redirect: Option<String>,
}

impl AuthStore {
    pub fn new(api: ApiClient, storage: SessionStorage) -> Self {
        let mut store = Self {
            api,
            storage,
            token: None,
            user: None,
            is_loading: false,
            error: None,
            pending_redirect: None,
        };
        // Mirror of the localStorage read at store creation
        if let Ok(Some(token)) = store.storage.get(TOKEN_KEY) {
            store.api.set_token(Some(token.clone()));
            store.token = Some(token);
        }
        store
    }

    /// Client carrying the current bearer token, for building other stores.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn reset_error(&mut self) {
        self.error = None;
    }

    /// Authenticated only while a token is present, decodes, and has an
    /// expiry in the future.
    pub fn is_authenticated(&self) -> bool {
        match &self.token {
            Some(token) => auth::token_is_valid(token),
            None => false,
        }
    }

    /// Park the target the guard blocked; the next successful sign-in
    /// honors it once.
    pub fn set_pending_redirect(&mut self, path: impl Into<String>) {
        self.pending_redirect = Some(path.into());
    }

    fn update_auth_data(&mut self, response: LoginResponse) {
        self.api.set_token(Some(response.token.clone()));
        if let Err(e) = self.storage.set(TOKEN_KEY, &response.token) {
            tracing::warn!("failed to persist token: {}", e);
        }
        self.token = Some(response.token.clone());
        self.user = Some(UserProfile::from(&response));
    }

    /// Sign in and return the path to navigate to: the pending redirect if
    /// one was parked, the dashboard otherwise. `None` means the sign-in
    /// failed and `error` holds the translated message.
    pub async fn signin(&mut self, credentials: &LoginRequest) -> Option<String> {
        self.is_loading = true;
        self.reset_error();

        let result = services::auth::login(&self.api, credentials).await;
        self.is_loading = false;

        match result {
            Ok(response) => {
                self.update_auth_data(response);
                Some(
                    self.pending_redirect
                        .take()
                        .unwrap_or_else(|| "/dashboard".to_string()),
                )
            }
            Err(e) => {
                tracing::error!("sign-in failed: {}", e);
                self.error = Some(e.user_facing());
                None
            }
        }
    }

    /// Clear the session. Server-side revocation is best effort; the local
    /// session always ends.
    pub async fn signout(&mut self) {
        if self.token.is_some() {
            if let Err(e) = services::auth::logout(&self.api).await {
                tracing::debug!("logout call failed: {}", e);
            }
        }
        self.token = None;
        self.user = None;
        self.api.set_token(None);
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!("failed to clear stored token: {}", e);
        }
    }

    /// Fetch the profile of the user the current token belongs to.
    pub async fn fetch_user(&mut self) {
        let Some(token) = self.token.clone() else {
            return;
        };
        self.is_loading = true;
        self.reset_error();

        match auth::decode_token(&token) {
            Some(claims) => {
                match services::user::get_user_details(&self.api, claims.user_id).await {
                    Ok(user) => self.user = Some(UserProfile::from(user)),
                    Err(e) => {
                        tracing::error!("failed to fetch user profile: {}", e);
                        self.error = Some(e.user_facing());
                    }
                }
            }
            None => {
                self.error = Some(UserFacingError {
                    status: None,
                    message: "Impossible de décoder le token.".to_string(),
                });
            }
        }
        self.is_loading = false;
    }

    pub async fn get_user_by_id(&mut self, user_id: i64) {
        self.is_loading = true;
        self.reset_error();
        match services::user::get_user_details(&self.api, user_id).await {
            Ok(user) => self.user = Some(UserProfile::from(user)),
            Err(e) => self.error = Some(e.user_facing()),
        }
        self.is_loading = false;
    }

    pub async fn register(&mut self, user: &UserRequest) {
        self.is_loading = true;
        self.reset_error();
        if let Err(e) = services::user::create_user(&self.api, user).await {
            self.error = Some(e.user_facing());
        }
        self.is_loading = false;
    }

    /// Restore a persisted session: a stored, still-valid token is adopted
    /// (fetching the profile if needed); anything else signs out.
    pub async fn initialize(&mut self) {
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(stored)) if auth::token_is_valid(&stored) => {
                self.api.set_token(Some(stored.clone()));
                self.token = Some(stored);
                if self.user.is_none() {
                    self.fetch_user().await;
                }
            }
            _ => self.signout().await,
        }
    }
}
