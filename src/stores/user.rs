use crate::api::ApiClient;
use crate::error::UserFacingError;
use crate::services;
use crate::types::{UserRequest, UserResponse};

/// Registered users known to this session.
pub struct UserStore {
    api: ApiClient,
    pub users: Vec<UserResponse>,
    pub is_loading: bool,
    pub error: Option<UserFacingError>,
}

impl UserStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            users: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn reset_error(&mut self) {
        self.error = None;
    }

    pub async fn add_user(&mut self, user: &UserRequest) {
        self.is_loading = true;
        self.reset_error();
        match services::user::create_user(&self.api, user).await {
            Ok(response) => self.users.push(response),
            Err(e) => {
                tracing::error!("user registration failed: {}", e);
                self.error = Some(e.user_facing());
            }
        }
        self.is_loading = false;
    }
}
