use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{UserRequest, UserResponse};

pub async fn create_user(api: &ApiClient, user: &UserRequest) -> Result<UserResponse, ApiError> {
    api.post("/users/register", user).await
}

pub async fn get_user_details(api: &ApiClient, user_id: i64) -> Result<UserResponse, ApiError> {
    api.get(&format!("/users/{}", user_id)).await
}
