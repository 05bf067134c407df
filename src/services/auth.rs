use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{LoginRequest, LoginResponse};

pub async fn login(api: &ApiClient, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    api.post("/login", credentials).await
}

/// Invalidates the current token server-side. The bearer header carries the
/// token to revoke.
pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty("/logout").await
}
