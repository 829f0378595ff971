use serde::{Deserialize, Serialize};

/// Credentials body accepted by both the register and login endpoints.
#[derive(Serialize, Deserialize, Clone)]
pub struct CredentialsDto {
    pub username: String,
    pub password: String,
}

/// Token response returned by successful register and login requests.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub token: String,
    pub user_id: i32,
    pub is_admin: bool,
}
