use serde::{Deserialize, Serialize};

/// Body of `POST /login`. Absent fields decode as empty strings and simply
/// fail the credential check.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub message: String,
    pub username: String,
}
