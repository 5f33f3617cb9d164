use shared::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use super::api::{ApiClient, ApiError};

/// `POST /auth/login`
/// Request: `LoginRequest { username, password }`.
/// Response: `LoginResponse { access_token, user_id, username, email, role,
/// dues_balance }`; 401 on bad credentials.
pub const LOGIN: &str = "/auth/login";

/// `POST /auth/register`
/// Request: `RegisterRequest { username, email?, password }`.
/// Response: `RegisterResponse { user_id, username, msg }`; 409 when the
/// username or email is already taken.
pub const REGISTER: &str = "/auth/register";

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN, request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json(REGISTER, request).await
    }
}
